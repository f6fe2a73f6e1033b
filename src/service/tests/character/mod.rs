
use crate::{
    data::character::CharacterRepository, error::Error, model::app::AppState,
    service::character::CharacterService,
};

use super::*;
