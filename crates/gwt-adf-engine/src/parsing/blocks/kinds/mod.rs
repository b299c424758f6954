pub mod checklist;
pub mod heading;
pub mod label;
pub mod separator;

pub use checklist::Checklist;
pub use heading::CaseHeading;
pub use label::Label;
pub use separator::Separator;
