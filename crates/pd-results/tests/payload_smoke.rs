use pd_results::*;

const PAYLOAD: &str = r#"{
    "daily": [
        {
            "period": "Day 1",
            "production": {"total": 412, "faulty_rate": 0.051, "avg_daily_production": 412.0},
            "downtime": {"total": 17.5},
            "occupancy": {"total": 64.2},
            "stations": [
                {"id": 1, "occupancy": 1290.4, "downtime": 3.1},
                {"id": 2, "occupancy": 1288.0, "downtime": 0.0}
            ]
        },
        {
            "period": "Day 2",
            "production": {"total": 398, "faulty_rate": 0.047, "avg_daily_production": 398.0},
            "downtime": {"total": 9.0},
            "occupancy": {"total": 58.9},
            "stations": [
                {"id": 1, "occupancy": 1301.2, "downtime": 0.0},
                {"id": 2, "occupancy": 1275.5, "downtime": 9.0}
            ]
        }
    ],
    "weekly": [
        {
            "period": "Week 1",
            "production": {"avg_daily_production": 405.0},
            "stations": [{"id": "press", "occupancy": 10.0, "downtime": 1.0}]
        }
    ],
    "monthly": [],
    "quarterly": [],
    "yearly": []
}"#;

#[test]
fn parse_server_payload() {
    let aggregate = parse_aggregate(PAYLOAD.as_bytes()).unwrap();

    assert_eq!(aggregate.granularities().count(), 5);

    let daily = aggregate.series(Granularity::Daily).unwrap();
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].period, "Day 1");
    assert_eq!(daily[0].production.avg_daily_production, 412.0);
    assert_eq!(daily[0].production.total, Some(412));
    assert_eq!(daily[1].downtime, Some(PlantTotal { total: 9.0 }));
    assert_eq!(daily[0].stations[1].label(), "Station 2");

    let weekly = aggregate.series(Granularity::Weekly).unwrap();
    assert_eq!(weekly[0].stations[0].id, StationId::from("press"));
    assert_eq!(weekly[0].stations[0].label(), "Station press");
    assert_eq!(weekly[0].production.faulty_rate, None);

    assert_eq!(aggregate.series(Granularity::Yearly).map(<[_]>::len), Some(0));
}

#[test]
fn missing_granularity_is_absent_not_empty() {
    let aggregate = parse_aggregate(br#"{"daily": []}"#).unwrap();
    assert!(aggregate.series(Granularity::Daily).is_some());
    assert!(aggregate.series(Granularity::Monthly).is_none());
}

#[test]
fn server_error_body_is_not_an_aggregate_error() {
    let err = parse_aggregate(br#"{"error": "boom"}"#).unwrap_err();
    assert!(matches!(err, ResultsError::NoSeries));
}
