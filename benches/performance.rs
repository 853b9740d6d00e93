use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wallet_core::{catalog::example_plans, FixedClock, InstallmentService, PlanFactory, ProgressService};
use wallet_domain::{DurationUnit, Language, PlanCategory, PlanDraft, SavingsPlan};

fn sample_draft() -> PlanDraft {
    PlanDraft {
        title: "Vacances".into(),
        target_amount: "15000".into(),
        duration: "12".into(),
        duration_unit: DurationUnit::Months,
        category: Some(PlanCategory::Vacation),
        ..PlanDraft::default()
    }
}

fn sample_plans(count: usize) -> Vec<SavingsPlan> {
    let examples = example_plans(Language::Fr);
    (0..count)
        .map(|idx| {
            let mut plan = examples[idx % examples.len()].clone();
            plan.id = idx as u64 + 1;
            plan.saved = (idx % 100) as f64 * 120.0;
            plan
        })
        .collect()
}

fn bench_installments(c: &mut Criterion) {
    c.bench_function("monthly_installment_years", |b| {
        b.iter(|| {
            InstallmentService::monthly_installment(
                black_box("15000"),
                black_box("3"),
                DurationUnit::Years,
            )
        })
    });
}

fn bench_progress(c: &mut Criterion) {
    let plans = sample_plans(10_000);
    let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap();

    c.bench_function("evaluate_progress_10k", |b| {
        b.iter(|| {
            for plan in &plans {
                black_box(ProgressService::evaluate(plan, now));
            }
        })
    });
}

fn bench_plan_factory(c: &mut Criterion) {
    let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    let draft = sample_draft();

    c.bench_function("create_plan", |b| {
        b.iter(|| PlanFactory::create(black_box(&draft), &clock).expect("valid draft"))
    });
}

criterion_group!(benches, bench_installments, bench_progress, bench_plan_factory);
criterion_main!(benches);
