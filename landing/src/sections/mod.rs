// Portfolio page sections, top to bottom.
// Each section takes the signals it reads or writes as props.

mod contact;
mod expertise;
mod footer;
mod hero;
mod history;
mod nav;
mod projects;

pub use contact::Contact;
pub use expertise::Expertise;
pub use footer::Footer;
pub use hero::Hero;
pub use history::History;
pub use nav::Nav;
pub use projects::Projects;
