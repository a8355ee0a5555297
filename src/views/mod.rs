pub mod node;
pub mod player_card;
pub mod player_list;
pub mod player_details;

pub use node::{Action, ViewNode};
pub use player_card::render_player_card;
pub use player_list::render_player_list;
pub use player_details::render_player_details;
