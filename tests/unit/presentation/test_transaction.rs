use crate::common::fixture;
use oanda_client::presentation::transaction::{TransactionFilter, TransactionPages};

#[test]
fn test_transaction_pages_fixture() {
    let pages: TransactionPages = serde_json::from_value(fixture("transaction_pages.json")).unwrap();

    assert_eq!(pages.page_size, Some(1000));
    assert_eq!(pages.count, Some(399));
    assert_eq!(pages.last_transaction_id.as_deref(), Some("6410"));
    assert_eq!(pages.id_bounds(), Some((2, 400)));
}

#[test]
fn test_single_page_bounds() {
    let pages = TransactionPages {
        pages: vec!["https://x/v3/accounts/A/transactions/idrange?from=17&to=17".to_string()],
        ..Default::default()
    };
    assert_eq!(pages.id_bounds(), Some((17, 17)));
}

#[test]
fn test_filter_wire_names_match_serde() {
    for filter in [
        TransactionFilter::Order,
        TransactionFilter::StopLossOrder,
        TransactionFilter::DailyFinancing,
    ] {
        assert_eq!(serde_json::to_value(filter).unwrap(), filter.as_str());
    }
}
