use rstest::*;

use crate::{
    prelude::{
        EpochData, InterruptSchedule, IonoRandomWalkModel, StochasticModel,
        DEFAULT_IONO_INTERRUPT_SIGMA_M,
    },
    tests::{assert_close, epoch, init_logger, reference_epoch, station, sv},
};

#[fixture]
fn model() -> IonoRandomWalkModel {
    let mut model = IonoRandomWalkModel::new(1.0E-3);
    model.set_sampling(7200.0);
    model.set_tolerance(0.5);
    model.set_initial_epoch(reference_epoch());
    model
}

#[rstest]
fn interrupt_overrides_elapsed_time(mut model: IonoRandomWalkModel) {
    init_logger();

    let (onsa, g01) = (station("ONSA"), sv("G01"));
    let data = EpochData::new();

    model.prepare(epoch(7170.0), &onsa, g01, &data);
    assert_eq!(model.q(), 0.0);

    model.prepare(epoch(7200.0), &onsa, g01, &data);
    assert_eq!(model.phi(), 1.0);
    assert_eq!(
        model.q(),
        DEFAULT_IONO_INTERRUPT_SIGMA_M * DEFAULT_IONO_INTERRUPT_SIGMA_M
    );

    // next epoch accumulates from the interrupt
    model.prepare(epoch(7230.0), &onsa, g01, &data);
    assert_close(model.q(), 1.0E-3 * 30.0);
}

#[rstest]
fn interrupt_applies_to_all_satellites(mut model: IonoRandomWalkModel) {
    let onsa = station("ONSA");
    let data = EpochData::new();
    let svs = [sv("G01"), sv("G02"), sv("E05")];

    for sv in svs {
        model.prepare(epoch(14370.0), &onsa, sv, &data);
    }

    model.set_interrupt_sigma(20.0);

    for sv in svs {
        model.prepare(epoch(14400.0), &onsa, sv, &data);
        assert_eq!(model.q(), 400.0, "{}: interrupt not applied", sv);
    }
}

#[rstest]
fn disabled_interrupts(mut model: IonoRandomWalkModel) {
    let (onsa, g01) = (station("ONSA"), sv("G01"));
    let data = EpochData::new();

    model.set_insert_interrupt(false);

    model.prepare(epoch(7170.0), &onsa, g01, &data);
    model.prepare(epoch(7200.0), &onsa, g01, &data);
    assert_close(model.q(), 1.0E-3 * 30.0);
}

#[rstest]
#[case(7199.0, false)]
#[case(7199.5, true)]
#[case(7200.25, true)]
#[case(7201.0, false)]
#[case(21600.0, true)]
fn interrupt_tolerance(mut model: IonoRandomWalkModel, #[case] t_s: f64, #[case] interrupt: bool) {
    let (onsa, g01) = (station("ONSA"), sv("G01"));
    let data = EpochData::new();

    model.set_qprime(0.0);
    model.prepare(epoch(t_s - 10.0), &onsa, g01, &data);
    model.prepare(epoch(t_s), &onsa, g01, &data);

    assert_eq!(model.q() > 0.0, interrupt, "failed for t0 + {}s", t_s);
}

#[test]
fn schedule_anchored_on_first_epoch() {
    let (onsa, g01) = (station("ONSA"), sv("G01"));
    let data = EpochData::new();

    let mut model = IonoRandomWalkModel::default();
    assert!(model.schedule().initial_epoch.is_none());

    model.prepare(epoch(100.0), &onsa, g01, &data);
    assert_eq!(model.schedule().initial_epoch, Some(epoch(100.0)));
    assert_eq!(model.q(), 0.0);

    model.prepare(epoch(7200.0), &onsa, g01, &data);
    assert_close(model.q(), 1.0E-3 * 7100.0);

    model.prepare(epoch(7300.0), &onsa, g01, &data);
    assert_eq!(model.q(), 1.0E4);
}

#[test]
fn custom_schedule() {
    let (onsa, g01) = (station("ONSA"), sv("G01"));
    let data = EpochData::new();

    let schedule = InterruptSchedule {
        enabled: true,
        sampling_s: 900.0,
        tolerance_s: 1.0,
        sigma_m: 1.0,
        initial_epoch: Some(reference_epoch()),
    };

    let mut model = IonoRandomWalkModel::new(1.0E-3).with_schedule(schedule);
    assert_eq!(model.qprime_of(&g01), 1.0E-3);

    model.prepare(epoch(870.0), &onsa, g01, &data);
    model.prepare(epoch(900.0), &onsa, g01, &data);
    assert_eq!(model.q(), 1.0);

    let record = model.record(&g01).unwrap();
    assert_eq!(record.previous, Some(epoch(900.0)));
}

#[rstest]
fn out_of_order_epoch_within_interrupt(mut model: IonoRandomWalkModel) {
    init_logger();

    let (onsa, g01) = (station("ONSA"), sv("G01"));
    let data = EpochData::new();

    model.prepare(epoch(7170.0), &onsa, g01, &data);
    model.prepare(epoch(7300.0), &onsa, g01, &data);

    // older than the previous epoch, though on the interrupt
    model.prepare(epoch(7200.0), &onsa, g01, &data);
    assert_eq!(model.q(), 0.0);
    assert_eq!(model.record(&g01).unwrap().previous, Some(epoch(7300.0)));

    model.prepare(epoch(7330.0), &onsa, g01, &data);
    assert_close(model.q(), 1.0E-3 * 30.0);
}

#[rstest]
fn one_interrupt_per_boundary(mut model: IonoRandomWalkModel) {
    let (onsa, g01, g02) = (station("ONSA"), sv("G01"), sv("G02"));
    let data = EpochData::new();

    model.prepare(epoch(7199.0), &onsa, g01, &data);
    model.prepare(epoch(7199.0), &onsa, g02, &data);

    // 2 Hz sampling: three epochs within the window
    for (t_s, expected) in [(7199.5, 1.0E4), (7200.0, 0.5E-3), (7200.5, 0.5E-3)] {
        model.prepare(epoch(t_s), &onsa, g01, &data);
        assert_close(model.q(), expected);
    }

    // other satellites still see this interrupt
    model.prepare(epoch(7200.0), &onsa, g02, &data);
    assert_eq!(model.q(), 1.0E4);

    // next boundary
    model.prepare(epoch(14399.5), &onsa, g01, &data);
    assert_eq!(model.q(), 1.0E4);
}

#[rstest]
fn rescheduling_resets_applied_interrupts(mut model: IonoRandomWalkModel) {
    let (onsa, g01) = (station("ONSA"), sv("G01"));
    let data = EpochData::new();

    model.prepare(epoch(7170.0), &onsa, g01, &data);
    model.prepare(epoch(7200.0), &onsa, g01, &data);
    assert_eq!(model.q(), 1.0E4);

    // first boundary of the new schedule lands at t0 + 7230s
    model.set_initial_epoch(epoch(30.0));
    model.prepare(epoch(7230.0), &onsa, g01, &data);
    assert_eq!(model.q(), 1.0E4);
}
