// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with value objects, model,
// commands, errors and a command handler. Persistence lives in `store`.
//
// ============================================================================

pub mod order;
