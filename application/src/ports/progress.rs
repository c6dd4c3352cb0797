//! Progress notification port
//!
//! Lets the surface show that an exchange with the model is in flight.

use biosense_domain::Model;

/// Callback for the lifetime of one remote exchange
///
/// Implementations live in the presentation layer (e.g. a terminal spinner).
pub trait ExchangeProgress: Send + Sync {
    /// Called right before the composed prompt is sent
    fn on_exchange_start(&self, model: &Model);

    /// Called once the exchange resolved, successfully or not
    fn on_exchange_end(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ExchangeProgress for NoProgress {
    fn on_exchange_start(&self, _model: &Model) {}
    fn on_exchange_end(&self, _success: bool) {}
}
