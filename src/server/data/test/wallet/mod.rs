use crate::server::{
    data::wallet::WalletRepository,
    model::wallet::{LedgerEntry, TransactionKind},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod apply;
mod get_or_create;
