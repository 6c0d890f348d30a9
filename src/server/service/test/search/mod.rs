use std::collections::HashSet;

use crate::server::{
    error::AppError,
    model::{
        product::ProductStatus,
        search::{SuggestionKind, MAX_SUGGESTIONS},
    },
    service::search::SearchService,
};
use test_utils::{builder::TestBuilder, factory::product::ProductFactory};

mod autocomplete;
