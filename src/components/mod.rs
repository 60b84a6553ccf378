pub mod city_bar;
pub mod notification;
pub mod weather_body;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use city_bar::{CityBar, CityBarProps};
pub use notification::{ERROR_ICON, Notification, NotificationProps};
pub use weather_body::{WeatherBody, WeatherBodyProps, icon_emoji};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};
