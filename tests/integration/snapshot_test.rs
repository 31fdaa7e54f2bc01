//! Snapshot loading and view rendering through the CLI layer

use dex_view::cli::{load_snapshot, OutputFormat, View, ViewArgs};
use dex_view::config::DisplayConfig;
use std::io::Write;

const SNAPSHOT: &str = r#"{
    "web3": {
        "account": "0x90f8bf6a479f320ead074411a4b0e7944ea8c9c1",
        "balance": "3000000000000000000"
    },
    "token": {
        "loaded": true,
        "address": "0x5b1869d9a4c187f2eaa108f3062412ecf0526b24",
        "balance": "100000000000000000000"
    },
    "exchange": {
        "loaded": true,
        "balancesLoading": false,
        "allOrders": {
            "loaded": true,
            "data": [
                {
                    "id": "1",
                    "user": "0x90f8bf6a479f320ead074411a4b0e7944ea8c9c1",
                    "tokenGet": "0x5b1869d9a4c187f2eaa108f3062412ecf0526b24",
                    "amountGet": "100000000000000000000",
                    "tokenGive": "0x0000000000000000000000000000000000000000",
                    "amountGive": "1000000000000000000",
                    "timestamp": "1591542245"
                },
                {
                    "id": "2",
                    "user": "0xffcf8fdee72ac11b5c542428b35eef5769c409f0",
                    "tokenGet": "0x0000000000000000000000000000000000000000",
                    "amountGet": "2000000000000000000",
                    "tokenGive": "0x5b1869d9a4c187f2eaa108f3062412ecf0526b24",
                    "amountGive": "100000000000000000000",
                    "timestamp": 1591545845
                },
                {
                    "id": "3",
                    "user": "0xffcf8fdee72ac11b5c542428b35eef5769c409f0",
                    "tokenGet": "0x0000000000000000000000000000000000000000",
                    "amountGet": "3000000000000000000",
                    "tokenGive": "0x5b1869d9a4c187f2eaa108f3062412ecf0526b24",
                    "amountGive": "100000000000000000000",
                    "timestamp": 1591549445
                }
            ]
        },
        "filledOrders": {
            "loaded": true,
            "data": [
                {
                    "id": "3",
                    "user": "0xffcf8fdee72ac11b5c542428b35eef5769c409f0",
                    "tokenGet": "0x0000000000000000000000000000000000000000",
                    "amountGet": "3000000000000000000",
                    "tokenGive": "0x5b1869d9a4c187f2eaa108f3062412ecf0526b24",
                    "amountGive": "100000000000000000000",
                    "timestamp": 1591549500,
                    "userFill": "0x90f8bf6a479f320ead074411a4b0e7944ea8c9c1"
                }
            ]
        },
        "cancelledOrders": { "loaded": true, "data": [] }
    }
}"#;

fn snapshot_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();
    file
}

fn args(file: &tempfile::NamedTempFile, format: OutputFormat) -> ViewArgs {
    ViewArgs {
        snapshot: file.path().to_path_buf(),
        account: None,
        format,
    }
}

#[test]
fn test_load_snapshot() {
    let file = snapshot_file();
    let state = load_snapshot(file.path()).unwrap();
    assert!(state.contracts_loaded());
    assert!(state.order_book_loaded());
    assert_eq!(state.exchange.all_orders.data.len(), 3);
    assert_eq!(state.exchange.filled_orders.data[0].id, 3);
}

#[test]
fn test_load_snapshot_rejects_garbage() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    assert!(load_snapshot(file.path()).is_err());
}

#[test]
fn test_order_book_json() {
    let file = snapshot_file();
    let output = args(&file, OutputFormat::Json)
        .render(View::OrderBook, &DisplayConfig::default())
        .unwrap();

    let book: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(book["buyOrders"].as_array().unwrap().len(), 1);
    assert_eq!(book["sellOrders"].as_array().unwrap().len(), 1);
    assert_eq!(book["buyOrders"][0]["tokenPrice"], "0.01");
    assert_eq!(book["buyOrders"][0]["orderFillAction"], "sell");
    assert_eq!(book["sellOrders"][0]["tokenPrice"], "0.02");
}

#[test]
fn test_order_book_table() {
    let file = snapshot_file();
    let output = args(&file, OutputFormat::Table)
        .render(View::OrderBook, &DisplayConfig::default())
        .unwrap();
    assert!(output.contains("ORDER BOOK"));
    assert!(output.contains("0.01"));
    assert!(output.contains("0.02"));
}

#[test]
fn test_my_trades_as_taker() {
    let file = snapshot_file();
    let output = args(&file, OutputFormat::Json)
        .render(View::MyTrades, &DisplayConfig::default())
        .unwrap();

    let trades: serde_json::Value = serde_json::from_str(&output).unwrap();
    let trades = trades.as_array().unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0]["orderType"], "buy");
    assert_eq!(trades[0]["orderSign"], "+");
}

#[test]
fn test_account_override() {
    let file = snapshot_file();
    let mut view = args(&file, OutputFormat::Json);
    view.account = Some("0xffcf8fdee72ac11b5c542428b35eef5769c409f0".parse().unwrap());

    let output = view
        .render(View::MyOrders, &DisplayConfig::default())
        .unwrap();
    let orders: serde_json::Value = serde_json::from_str(&output).unwrap();
    let ids: Vec<&str> = orders
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn test_balances_json() {
    let file = snapshot_file();
    let output = args(&file, OutputFormat::Json)
        .render(View::Balances, &DisplayConfig::default())
        .unwrap();
    let balances: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(balances["ether"], "3");
    assert_eq!(balances["token"], "100");
    assert_eq!(balances["exchangeEther"], "0");
}

#[test]
fn test_chart_json() {
    let file = snapshot_file();
    let output = args(&file, OutputFormat::Json)
        .render(View::PriceChart, &DisplayConfig::default())
        .unwrap();
    let chart: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(chart["lastPrice"], "0.03");
    assert_eq!(chart["lastPriceChange"], "indeterminate");
    assert_eq!(chart["candles"].as_array().unwrap().len(), 1);
}

#[test]
fn test_missing_snapshot() {
    let view = ViewArgs {
        snapshot: "/nonexistent/state.json".into(),
        account: None,
        format: OutputFormat::Table,
    };
    assert!(view.render(View::Trades, &DisplayConfig::default()).is_err());
}
