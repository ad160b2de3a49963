//! Run-level behaviour: clamp ranges, row accounting, vote ratios,
//! platform differences, and input validation.

use crowdtest_core::{
    engine::{MAX_ROUNDS, MIN_ROUNDS},
    personas_from_json, run_simulation,
    simulate::simulate,
    rng::RunRng,
    Persona, Platform, Post, SimError,
};

fn posts() -> (Post, Post) {
    let a = Post {
        thumb_desc: "明亮特寫，主體居中".into(),
        caption: "限時優惠！3個貼士教你揀福袋，快啲留言分享你嘅戰利品！".into(),
        hashtags: "#卡牌 #pokemon #tcg".into(),
    };
    let b = Post {
        thumb_desc: "背光嘅模糊相片".into(),
        caption: "今日返工好攰".into(),
        hashtags: "#日常".into(),
    };
    (a, b)
}

fn personas() -> Vec<Persona> {
    personas_from_json(
        r#"[
            {"id":"p1","年齡段":"19-25","興趣":["卡牌"],"emoji接受度":0.6,"使用時間段":"晚上9點後"},
            {"id":"p2","年齡段":"26-35","興趣":["美食","旅遊"],"emoji接受度":0.2,"使用時間段":"清晨"},
            {"id":"p3","年齡段":"13-18","興趣":[],"emoji接受度":0.9,"使用時間段":"週末下午"}
        ]"#,
    )
    .expect("personas")
}

#[test]
fn probabilities_stay_in_documented_clamp_ranges() {
    let (post_a, post_b) = posts();
    let personas = personas();

    for seed in [1u64, 42, 777, 31337] {
        for platform in [Platform::Ig, Platform::Threads] {
            let output =
                run_simulation(&post_a, &post_b, platform, &personas, 10, seed).expect("run");
            for row in &output.rows {
                for p in [row.a_like_p, row.b_like_p] {
                    assert!((0.02..=0.98).contains(&p), "like_p out of range: {p}");
                }
                for p in [row.a_comment_p, row.b_comment_p] {
                    assert!((0.01..=0.90).contains(&p), "comment_p out of range: {p}");
                }
                for p in [row.a_share_p, row.b_share_p] {
                    assert!((0.005..=0.70).contains(&p), "share_p out of range: {p}");
                }
                for p in [row.a_save_p, row.b_save_p] {
                    assert!((0.0..=0.85).contains(&p), "save_p out of range: {p}");
                }
            }
        }
    }
}

#[test]
fn row_count_is_rounds_times_personas() {
    let (post_a, post_b) = posts();
    let personas = personas();

    for rounds in [1u32, 3, 10] {
        let output =
            run_simulation(&post_a, &post_b, Platform::Ig, &personas, rounds, 42).expect("run");
        assert_eq!(output.rows.len(), rounds as usize * personas.len());
        assert_eq!(output.summary.rounds, rounds);
        assert_eq!(output.summary.personas, personas.len());
        assert_eq!(
            output.summary.votes_a + output.summary.votes_b,
            output.rows.len() as u64
        );
    }
}

#[test]
fn rows_are_round_major_persona_minor() {
    let (post_a, post_b) = posts();
    let personas = personas();

    let output = run_simulation(&post_a, &post_b, Platform::Ig, &personas, 2, 42).expect("run");
    let order: Vec<(u32, &str)> = output
        .rows
        .iter()
        .map(|r| (r.round, r.persona_id.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            (1, "p1"),
            (1, "p2"),
            (1, "p3"),
            (2, "p1"),
            (2, "p2"),
            (2, "p3")
        ]
    );
}

#[test]
fn vote_ratios_sum_to_exactly_one() {
    let (post_a, post_b) = posts();
    let personas = personas();

    for seed in 0..20u64 {
        let output =
            run_simulation(&post_a, &post_b, Platform::Threads, &personas, 3, seed).expect("run");
        let s = &output.summary;
        assert_eq!(s.vote_ratio_a + s.vote_ratio_b, 1.0);
        let (low, high) = s.wilson_95ci_a;
        // One-sided sweeps put the ratio exactly on an endpoint, where
        // sqrt rounding can leave the bound a few ulps past it.
        let eps = 1e-12;
        assert!(low >= -eps && high <= 1.0 + eps && low <= high);
        assert!(low <= s.vote_ratio_a + eps && s.vote_ratio_a <= high + eps);
    }
}

#[test]
fn threads_never_saves() {
    let (post_a, post_b) = posts();
    let personas = personas();

    let output =
        run_simulation(&post_a, &post_b, Platform::Threads, &personas, 10, 42).expect("run");
    for row in &output.rows {
        assert_eq!(row.a_save_p, 0.0);
        assert_eq!(row.b_save_p, 0.0);
    }
    assert_eq!(output.summary.avg_a.save_p, 0.0);
    assert_eq!(output.summary.avg_b.save_p, 0.0);

    // The boolean draw is forced false as well.
    let mut rng = RunRng::new(42);
    for persona in &personas {
        let result = simulate(&post_a, persona, Platform::Threads, &mut rng);
        assert_eq!(result.save_p, 0.0);
        assert!(!result.save);
    }
}

#[test]
fn averages_are_per_trial_means_within_clamps() {
    let (post_a, post_b) = posts();
    let personas = personas();

    let output = run_simulation(&post_a, &post_b, Platform::Ig, &personas, 5, 42).expect("run");
    let trials = output.rows.len() as f64;
    let mean_a_like: f64 = output.rows.iter().map(|r| r.a_like_p).sum::<f64>() / trials;
    assert!((output.summary.avg_a.like_p - mean_a_like).abs() < 1e-12);
    assert!((0.02..=0.98).contains(&output.summary.avg_b.like_p));
}

#[test]
fn empty_persona_list_yields_even_split() {
    let (post_a, post_b) = posts();
    let output = run_simulation(&post_a, &post_b, Platform::Ig, &[], 3, 42).expect("run");
    assert!(output.rows.is_empty());
    assert_eq!(output.summary.vote_ratio_a, 0.5);
    assert_eq!(output.summary.vote_ratio_b, 0.5);
    assert_eq!(output.summary.wilson_95ci_a, (0.0, 1.0));
    assert_eq!(output.summary.avg_a.like_p, 0.0);
}

#[test]
fn out_of_range_rounds_are_rejected() {
    let (post_a, post_b) = posts();
    let personas = personas();

    for rounds in [0u32, 11, 100] {
        let err = run_simulation(&post_a, &post_b, Platform::Ig, &personas, rounds, 42)
            .expect_err("rounds outside [1,10] must be rejected");
        assert!(matches!(err, SimError::InvalidRounds { .. }), "got: {err}");
    }
    assert_eq!(MIN_ROUNDS, 1);
    assert_eq!(MAX_ROUNDS, 10);
}

#[test]
fn non_finite_persona_floats_are_rejected() {
    let (post_a, post_b) = posts();
    let mut personas = personas();
    personas[1].emoji_acceptance = f64::NAN;

    let err = run_simulation(&post_a, &post_b, Platform::Ig, &personas, 3, 42)
        .expect_err("NaN emoji acceptance must be rejected");
    assert!(matches!(err, SimError::NonFinite { .. }), "got: {err}");
}

#[test]
fn empty_posts_still_simulate() {
    let personas = personas();
    let output = run_simulation(
        &Post::default(),
        &Post::default(),
        Platform::Ig,
        &personas,
        3,
        42,
    )
    .expect("empty posts must not fail");
    assert_eq!(output.rows.len(), 9);
    for row in &output.rows {
        assert!(row.a_like_p > 0.0);
    }
}
