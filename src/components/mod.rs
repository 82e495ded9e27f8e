pub mod api_config_form;
pub mod chart;
pub mod employee_list;
pub mod report_view;
pub mod statistics_view;
pub mod status;
pub mod summary;

pub use api_config_form::ApiConfigForm;
pub use employee_list::EmployeeList;
pub use report_view::ReportView;
pub use statistics_view::{AreaCountsView, StatisticsView};
