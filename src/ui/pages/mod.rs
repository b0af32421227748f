pub mod delivery_areas;
pub mod home;
pub mod price_calculator;

pub use delivery_areas::DeliveryAreasPage;
pub use home::HomePage;
pub use price_calculator::PriceCalculatorPage;
