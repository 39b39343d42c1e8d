use criterion::{criterion_group, criterion_main, Criterion};
use probemap::traits::creatable::Creatable;
use probemap::{Double, Linear, ProbeStrategy, Quadratic, SlotTable};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn bench_strategy<P>(c: &mut Criterion, name: &str)
where
    P: ProbeStrategy + Default,
{
    c.bench_function(&format!("{name} get none"), |b| {
        let mut table: SlotTable<String, u32, P> = SlotTable::with_capacity(100).unwrap();
        table.extend(make_keys().take(500).map(|i| (i, 32)));

        let data = "holle".to_string();
        b.iter(|| {
            let _ = table.get(black_box(&data));
        });
    });

    c.bench_function(&format!("{name} get"), |b| {
        let mut table: SlotTable<String, u32, P> = SlotTable::with_capacity(100).unwrap();
        table.extend(make_keys().take(500).map(|i| (i, 32)));

        let data = make_keys().nth(3).unwrap();
        b.iter(|| {
            table.get(black_box(&data)).unwrap();
        });
    });

    c.bench_function(&format!("{name} get after churn"), |b| {
        let mut table: SlotTable<String, u32, P> = SlotTable::with_capacity(1000).unwrap();
        for (i, key) in make_keys().take(2000).enumerate() {
            table.set(key, i as u32);
            if i % 4 != 0 {
                table.delete(&make_keys().nth(i).unwrap());
            }
        }

        let data = make_keys().nth(1996).unwrap();
        b.iter(|| {
            table.get(black_box(&data)).unwrap();
        });
    });

    c.bench_function(&format!("{name} insert"), |b| {
        let mut table: SlotTable<String, usize, P> = SlotTable::with_capacity(100_000).unwrap();
        let data = black_box(make_keys().nth(black_box(3)).unwrap());

        b.iter_custom(|i| {
            let mut dur = Duration::from_secs(0);

            for _ in 0..i {
                let key = data.clone();
                let start = Instant::now();
                table.set(black_box(key), black_box(2314));
                dur += start.elapsed();
                table.clear();
            }

            dur
        });
    });

    c.bench_function(&format!("{name} grow"), |b| {
        let keys: Vec<_> = make_keys().take(1000).collect();
        b.iter(|| {
            let mut table: SlotTable<&str, usize, P> = SlotTable::create().unwrap();
            for (i, key) in keys.iter().enumerate() {
                table.set(key.as_str(), i);
            }
            black_box(table.capacity())
        });
    });
}

fn benchme(c: &mut Criterion) {
    bench_strategy::<Linear>(c, "linear");
    bench_strategy::<Quadratic>(c, "quadratic");
    bench_strategy::<Double>(c, "double");
}

pub fn make_keys() -> impl Iterator<Item = String> {
    let mut i = 0;
    std::iter::from_fn(move || {
        let txt = format!("{i}_{i}_DATA");
        i += 1;
        Some(txt)
    })
}

criterion_group!(benches, benchme);
criterion_main!(benches);
