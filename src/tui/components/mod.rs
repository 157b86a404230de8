//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `NavBar`: Brand header with inline links or a collapsible dropdown
//! - `MessageView`: One conversation message
//! - `LandingPage`: Greeting shown before the first message
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: Draft editor, disabled while a request is pending
//! - `MessageList`: Scrollable conversation view with layout caching
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), never by
//! reaching into `App`. Each file holds the component's state, events,
//! rendering, and tests.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── nav_bar.rs       (Header + link list)
//! ├── message.rs       (Single message renderer)
//! ├── message_list.rs  (Scrollable message container)
//! ├── landing.rs       (Empty-conversation greeting)
//! └── input_box/       (Draft editor)
//! ```

pub mod input_box;
pub mod landing;
pub mod message;
pub mod message_list;
pub mod nav_bar;

pub use input_box::{InputBox, InputEvent};
pub use landing::LandingPage;
pub use message_list::{MessageList, MessageListState};
pub use nav_bar::NavBar;
