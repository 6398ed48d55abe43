use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::rest::RestEmployeeClient;
use crate::traits::EmployeeApi;

/// 根据配置创建员工服务客户端
pub fn create_client(config: ClientConfig) -> Result<Arc<dyn EmployeeApi>> {
    log::debug!(
        "Creating employee client for {} (max_attempts={}, max_delay={:?})",
        config.base_url,
        config.retry.max_attempts,
        config.retry.max_delay
    );
    Ok(Arc::new(RestEmployeeClient::new(config)?))
}
