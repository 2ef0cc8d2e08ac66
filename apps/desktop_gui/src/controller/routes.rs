//! Page routing for the two views.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    OrderForm,
}

impl Route {
    pub const HOME_PATH: &'static str = "/";
    pub const ORDER_PATH: &'static str = "/order";

    /// Unknown paths land on Home.
    pub fn from_path(path: &str) -> Self {
        match path.trim().trim_end_matches('/') {
            Self::ORDER_PATH => Route::OrderForm,
            _ => Route::Home,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => Self::HOME_PATH,
            Route::OrderForm => Self::ORDER_PATH,
        }
    }
}
