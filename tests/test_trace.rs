use vm_allocation_simulator::core::common::RuntimeResources;
use vm_allocation_simulator::core::errors::InvalidDemand;
use vm_allocation_simulator::trace::generic::{DemandEvent, DemandTrace};
use vm_allocation_simulator::trace::interface::DemandSource;

#[test]
fn test_deserialize_empty_trace() {
    let deserialized = DemandTrace::from_yaml_str("events: []").unwrap();
    assert_eq!(DemandTrace { events: vec![] }, deserialized);
}

#[test]
fn test_deserialize_trace_from_yaml() {
    let trace_yaml = r#"
    events:
    - tick: 1
      cpu: 3
      ram: 4
    - tick: 4
      cpu: 5
      ram: 1
    "#;

    let deserialized = DemandTrace::from_yaml_str(trace_yaml).unwrap();
    let trace = DemandTrace {
        events: vec![
            DemandEvent {
                tick: 1,
                cpu: 3,
                ram: 4,
            },
            DemandEvent {
                tick: 4,
                cpu: 5,
                ram: 1,
            },
        ],
    };
    assert_eq!(trace, deserialized);
}

#[test]
fn test_yaml_and_csv_traces_replay_the_same() {
    let yaml = DemandTrace::from_yaml_str(
        r#"
    events:
    - { tick: 2, cpu: 3, ram: 4 }
    - { tick: 3, cpu: 6, ram: 10 }
    "#,
    )
    .unwrap();
    let csv = DemandTrace::from_csv_str("2,3,4\n3,6,10\n").unwrap();
    assert_eq!(yaml, csv);

    let capacity = RuntimeResources::new(10, 20);
    let mut yaml_source = yaml.into_source(capacity);
    let mut csv_source = csv.into_source(capacity);
    for tick in 1..=5 {
        assert_eq!(
            yaml_source.next_demand(tick).unwrap(),
            csv_source.next_demand(tick).unwrap()
        );
    }
}

#[test]
fn test_zero_request_in_trace() {
    let trace = DemandTrace::from_csv_str("1,0,4\n").unwrap();
    let mut source = trace.into_source(RuntimeResources::new(10, 20));
    assert_eq!(
        Err(InvalidDemand::ZeroRequest {
            app_id: 1,
            requests: RuntimeResources::new(0, 4),
        }),
        source.next_demand(1)
    );
}

#[test]
fn test_missing_trace_file() {
    let path = std::env::temp_dir().join("vm_allocation_no_such_trace.yaml");
    assert!(DemandTrace::from_file(&path).is_err());
}
