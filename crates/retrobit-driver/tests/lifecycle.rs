//! Bind / unbind behavior of the Retro-Bit driver against a mock host.

use retrobit_hid_driver::host::mock::{HostCall, MockHidHost};
use retrobit_hid_driver::{
    BindError, ConnectMask, DEVICE_TABLE, HidDeviceId, HidDriver, HidHost, HidQuirks, HostError,
    RawEventOutcome, ReportKind, RetrobitDriver, match_device,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn entry(product_id: u16) -> Result<&'static HidDeviceId, String> {
    match_device(&DEVICE_TABLE, 0x1292, product_id)
        .ok_or_else(|| format!("{product_id:#06x} missing from the device table"))
}

/// What a host does on attach: consult the id table, then probe.
fn attach(
    driver: &dyn HidDriver,
    host: &mut MockHidHost,
    vendor_id: u16,
    product_id: u16,
) -> Option<Result<retrobit_hid_driver::DeviceContext, BindError>> {
    let id = match_device(driver.id_table(), vendor_id, product_id)?;
    Some(driver.probe(host, id))
}

#[test]
fn driver_identity() {
    let driver = RetrobitDriver::new();
    assert_eq!(driver.name(), "atari");
    assert_eq!(driver.id_table().len(), 3);
    assert_eq!(driver.id_table(), &DEVICE_TABLE);
}

#[test]
fn unknown_device_never_reaches_probe() {
    let mut host = MockHidHost::new("foreign");
    assert!(attach(&RetrobitDriver, &mut host, 0x046D, 0xC21D).is_none());
    assert!(attach(&RetrobitDriver, &mut host, 0x1292, 0x4745).is_none());
    assert!(host.calls().is_empty());
}

#[test]
fn every_table_entry_binds() -> Result<(), BindError> {
    for id in RetrobitDriver.id_table() {
        let mut host = MockHidHost::new(format!("{:04x}:{:04x}", id.vendor_id, id.product_id));
        let ctx = RetrobitDriver.probe(&mut host, id)?;
        assert_eq!(ctx.id(), id);
        assert_eq!(ctx.is_multi_input(), id.is_multi_input());
        assert!(host.is_started());
    }
    Ok(())
}

#[test]
fn probe_keeps_existing_host_quirks() -> TestResult {
    let other = HidQuirks::from_bits_retain(0x0004);
    let mut host = MockHidHost::new("quirky");
    host.set_quirks(other);
    let ctx = RetrobitDriver.probe(&mut host, entry(0x4154)?)?;
    assert_eq!(host.quirks(), other | HidQuirks::MULTI_INPUT);
    assert_eq!(ctx.quirks(), other | HidQuirks::MULTI_INPUT);
    Ok(())
}

#[test]
fn parse_failure_aborts_before_hw_start() -> TestResult {
    let mut host = MockHidHost::new("broken").fail_parse(HostError::new(-22, "bad descriptor"));
    let result = RetrobitDriver.probe(&mut host, entry(0x4154)?);

    assert_eq!(
        result,
        Err(BindError::Parse(HostError::new(-22, "bad descriptor")))
    );
    assert_eq!(host.calls(), &[HostCall::Parse]);
    assert!(!host.is_started());
    assert!(host.quirks().is_empty(), "quirks must be unwound");
    Ok(())
}

#[test]
fn hw_start_failure_reports_code() -> TestResult {
    let mut host = MockHidHost::new("unplugged").fail_hw_start(HostError::new(-19, "no device"));
    let result = RetrobitDriver.probe(&mut host, entry(0x5346)?);
    assert!(matches!(result, Err(BindError::HwStart(_))));
    assert_eq!(result.as_ref().err().map(BindError::code), Some(-19));
    assert_eq!(
        host.calls(),
        &[HostCall::Parse, HostCall::HwStart(ConnectMask::DEFAULT)]
    );
    assert!(!host.is_started());
    assert!(host.quirks().is_empty(), "quirks must be unwound");
    Ok(())
}

#[test]
fn failed_bind_is_not_retried() -> TestResult {
    let mut host = MockHidHost::new("once").fail_parse(HostError::new(-12, "oom"));
    assert!(RetrobitDriver.probe(&mut host, entry(0x4643)?).is_err());
    assert_eq!(host.calls().len(), 1);
    Ok(())
}

#[test]
fn remove_stops_hardware() -> TestResult {
    let mut host = MockHidHost::new("pad");
    let ctx = RetrobitDriver.probe(&mut host, entry(0x4643)?)?;
    RetrobitDriver.remove(&mut host, ctx);

    assert!(!host.is_started());
    assert_eq!(host.calls().last(), Some(&HostCall::HwStop));
    Ok(())
}

#[test]
fn reports_flow_until_remove() -> TestResult {
    let driver: Box<dyn HidDriver> = Box::new(RetrobitDriver);
    let mut host = MockHidHost::new("snes");
    let id = entry(0x5346)?;
    let ctx = driver.probe(&mut host, id)?;

    let mut reports = vec![
        vec![0x01, 0x08, 0x00],
        vec![0x02, 0x0A, 0x03],
        vec![0x01, 0x05, 0x80],
    ];
    for report in &mut reports {
        assert_eq!(
            driver.raw_event(&ctx, ReportKind::Input, report),
            RawEventOutcome::Continue
        );
    }
    assert_eq!(
        reports,
        vec![
            vec![0x01, 0x0C, 0x00],
            vec![0x02, 0x0F, 0x03],
            vec![0x01, 0x05, 0x80],
        ]
    );

    driver.remove(&mut host, ctx);
    Ok(())
}
