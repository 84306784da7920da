pub mod history;
pub mod order;
pub mod position;
pub mod token;

// Re-export for easier access
pub use history::{HistoryKind, HistoryRecord, OrderCancellation, OrderCreation, PositionClosure};
pub use order::{CreateOrderArgs, Order, OrderReadiness};
pub use position::Position;
pub use token::TokenInfo;
