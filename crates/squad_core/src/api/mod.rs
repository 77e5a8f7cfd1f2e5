pub mod balance_json;

pub use balance_json::{
    balance_teams, balance_teams_json, request_schema, request_schema_json, BalanceRequest,
    BalanceResponse, PlayerData, SCHEMA_VERSION,
};
