pub mod device_grid;
pub mod energy_summary_card;
pub mod gauge;
pub mod usage_chart_view;

pub use device_grid::DeviceGrid;
pub use energy_summary_card::EnergySummaryCard;
pub use gauge::Gauge;
pub use usage_chart_view::UsageChartView;
