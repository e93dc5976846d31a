use criterion::{Criterion, black_box, criterion_group, criterion_main};

use valtti_cms::{csv, specs};

/// A models sheet of `n` rows with quoted HTML and pipe image lists.
fn synthetic_models(n: usize) -> String {
    let mut doc = String::from(
        "id,title,size,shortDesc,description,mainImage,images,specs_room_sqm,specs_total_sqm,specs_bedrooms,specs_bathrooms\n",
    );
    for i in 0..n {
        doc.push_str(&format!(
            "m{i},Malli {i},{i} m²,\"Lyhyt, kuvaus\",\"<p>Kuvaus \"\"{i}\"\"</p>\",m{i}.jpg,m{i}a.jpg|m{i}b.jpg|m{i}c.jpg,{i},{i},3,2\n"
        ));
    }
    doc
}

fn bench_table(c: &mut Criterion) {
    let doc = synthetic_models(500);

    c.bench_function("parse_table_500", |b| {
        b.iter(|| {
            let rows = csv::parse_table(black_box(&doc));
            black_box(rows.len())
        })
    });

    c.bench_function("models_shape_500", |b| {
        b.iter(|| {
            let catalog = specs::models::parse(black_box(&doc));
            black_box(catalog.len())
        })
    });
}

criterion_group!(benches, bench_table);
criterion_main!(benches);
