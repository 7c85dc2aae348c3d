// ============================================================================
// Order Domain - Pizza orders and their line items
// ============================================================================
//
// - Value objects (the fixed status/type/size vocabularies)
// - Model (Order, OrderItem)
// - Commands (PlaceOrder request)
// - Errors (OrderError, ValidationErrors)
// - Command Handler (OrderCommandHandler)
//
// ============================================================================

pub mod value_objects;
pub mod model;
pub mod commands;
pub mod errors;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use model::*;
pub use commands::*;
pub use errors::*;
pub use command_handler::*;
