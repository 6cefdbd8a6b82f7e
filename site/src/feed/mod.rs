//! Feed module
//!
//! HTML rendering for the repository and post feeds, plus the client-side
//! behavior script that wires hover effects and the modal reader.

pub mod behavior;
pub mod format;
pub mod renderer;

pub use behavior::behavior_script;
pub use renderer::{
    render_page, render_post_modal, render_posts, render_posts_loading, render_projects,
    render_projects_loading,
};
