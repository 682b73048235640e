use criterion::{black_box, criterion_group, criterion_main, Criterion};
use codewars_leaderboard::{
    extract_categories, rank_by, RankingSelector, UserProfile, UserRecord,
};

const LANGUAGES: [&str; 6] = ["javascript", "python", "rust", "java", "go", "ruby"];

fn create_test_records(count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|i| {
            let identifier = format!("user{}", i);
            if i % 10 == 9 {
                return UserRecord::failure(&identifier, format!("User not found: \"{}\" (404).", identifier));
            }
            let profile = LANGUAGES
                .iter()
                .enumerate()
                .filter(|(l, _)| (i + l) % 3 != 0)
                .fold(UserProfile::new(&identifier, (i * 37 % 5000) as i64), |p, (l, lang)| {
                    p.with_language(*lang, ((i + l) * 13 % 3000) as i64)
                });
            UserRecord::success(identifier, profile)
        })
        .collect()
}

fn bench_ranking(c: &mut Criterion) {
    let records_10 = create_test_records(10);
    let records_100 = create_test_records(100);
    let records_1000 = create_test_records(1000);
    let python = RankingSelector::from("python");

    c.bench_function("rank_overall_10", |b| {
        b.iter(|| black_box(rank_by(&records_10, &RankingSelector::Overall)))
    });

    c.bench_function("rank_overall_100", |b| {
        b.iter(|| black_box(rank_by(&records_100, &RankingSelector::Overall)))
    });

    c.bench_function("rank_language_1000", |b| {
        b.iter(|| black_box(rank_by(&records_1000, &python)))
    });

    c.bench_function("extract_categories_1000", |b| {
        b.iter(|| black_box(extract_categories(&records_1000)))
    });
}

criterion_group!(benches, bench_ranking);
criterion_main!(benches);
