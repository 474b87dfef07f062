pub mod candidate;
pub mod reference;
pub mod requisition;
pub mod stage;
