//! 页面状态定义

use employee_directory_client::EmployeeId;
use employee_directory_core::Route;

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 员工列表
    #[default]
    EmployeeList,
    /// 员工详情
    EmployeeDetail { employee_id: EmployeeId },
}

impl Page {
    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::EmployeeDetail { .. })
    }

    /// 对应的路由
    pub fn route(&self) -> Route {
        match self {
            Page::EmployeeList => Route::EmployeeList,
            Page::EmployeeDetail { employee_id } => Route::EmployeeDetail {
                id: employee_id.clone(),
            },
        }
    }
}

impl From<Route> for Page {
    fn from(route: Route) -> Self {
        match route {
            Route::EmployeeList => Page::EmployeeList,
            Route::EmployeeDetail { id } => Page::EmployeeDetail { employee_id: id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_routes() {
        let page = Page::EmployeeDetail {
            employee_id: "4".into(),
        };
        assert_eq!(page.route().path(), "/employee/4");
        assert_eq!(Page::from(page.route()), page);
        assert!(!Page::EmployeeList.is_detail_page());
    }
}
