mod all;
mod footer;
mod form;
mod log;
mod modal;

use self::log::log;
use super::*;
use footer::footer;
use form::form;
use modal::{confirm_reset, notification};

pub use all::all as render;
