mod consult;
mod menu;
mod options;
mod order;
mod payment;
mod reservation;

pub use consult::ConsultFlow;
pub use menu::MenuFlow;
pub use options::OptionsFlow;
pub use order::OrderFlow;
pub use payment::PaymentFlow;
pub use reservation::ReservationFlow;
