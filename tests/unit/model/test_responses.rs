use oanda_client::model::responses::{
    CloseTradeResult, OpenTrades, OpenTradesResponse, OrderResult, TransactionIdRange,
};
use serde_json::json;

#[test]
fn test_order_result_null_create_transaction_fails() {
    let response = json!({"orderCreateTransaction": null, "lastTransactionID": "10"});
    assert!(matches!(
        OrderResult::from_response(response),
        OrderResult::Failed { .. }
    ));
}

#[test]
fn test_order_result_deserializes_each_shape() {
    let done: OrderResult = serde_json::from_value(json!({
        "message": "Market order is done !",
        "order": {"id": "1"},
        "response": {"orderCreateTransaction": {"id": "1"}}
    }))
    .unwrap();
    assert!(done.is_done());

    let failed: OrderResult =
        serde_json::from_value(json!({"message": "Market order is failed.", "result": {}}))
            .unwrap();
    assert!(matches!(failed, OrderResult::Failed { .. }));

    let rejected: OrderResult = serde_json::from_value(json!({"error": "no stop"})).unwrap();
    assert!(matches!(rejected, OrderResult::Rejected { .. }));
}

#[test]
fn test_close_trade_result_shape() {
    let result = CloseTradeResult::new("exit signal", json!({"lastTransactionID": "7"}));
    assert_eq!(
        serde_json::to_value(result).unwrap(),
        json!({
            "message": "[Client] Position is closed",
            "reason": "exit signal",
            "response": {"lastTransactionID": "7"}
        })
    );
}

#[test]
fn test_open_trades_without_trades_field() {
    let raw: OpenTradesResponse =
        serde_json::from_value(json!({"lastTransactionID": "3"})).unwrap();
    let trades = OpenTrades::from(raw);
    assert!(trades.positions.is_empty());
    assert_eq!(trades.last_transaction_id, "3");
}

#[test]
fn test_transaction_id_range_from_numbers() {
    let range = TransactionIdRange::from((2, 400));
    assert_eq!(range.from, "2");
    assert_eq!(range.to, "400");
}
