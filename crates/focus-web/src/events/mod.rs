pub mod checklist;
pub mod pointer;
pub mod ritual;
pub mod timer;

pub use checklist::wire_checklist_handlers;
pub use pointer::wire_pointer_handlers;
pub use ritual::wire_ritual_buttons;
pub use timer::wire_timer_controls;
