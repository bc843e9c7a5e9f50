mod all;
mod filter_bar;
mod filter_panel;
mod footer;
mod log;
mod project_card;
mod project_list;
mod result_bar;

use self::log::log;
use super::*;
use filter_bar::filter_bar;
use filter_panel::filter_panel;
use footer::footer;
use project_card::project_card;
use project_list::project_list;
use result_bar::result_bar;

pub use all::all as render;
