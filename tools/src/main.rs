//! ab-runner: headless A/B content-performance runner.
//!
//! Loads a persona dataset and two candidate posts, runs one
//! simulation in crowdtest-core, and renders the summary plus an
//! optional CSV of the per-trial rows.
//!
//! Usage:
//!   ab-runner --platform IG --rounds 3 --seed 42
//!   ab-runner --personas my_personas.json --posts posts.json --csv rows.csv
//!
//! posts.json shape: {"a": {"thumb_desc": "...", "caption": "...",
//! "hashtags": "..."}, "b": {...}}. Without --posts, a bundled demo
//! pair (the PSA10 card-bag comparison) is used.

use anyhow::{Context, Result};
use crowdtest_core::{
    personas_from_json, run_simulation, Platform, Post, SimulationOutput, Vote,
};
use std::env;
use std::fs;

#[derive(serde::Deserialize)]
struct PostsFile {
    a: Post,
    b: Post,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let rounds = parse_arg(&args, "--rounds", 3u32);
    let platform: Platform = str_arg(&args, "--platform").unwrap_or("IG").parse()?;
    let personas_path = str_arg(&args, "--personas").unwrap_or("./data/hk_personas.json");

    let personas_raw = fs::read_to_string(personas_path)
        .with_context(|| format!("cannot read persona file {personas_path}"))?;
    let personas = personas_from_json(&personas_raw)?;

    let (post_a, post_b) = match str_arg(&args, "--posts") {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("cannot read posts file {path}"))?;
            let file: PostsFile =
                serde_json::from_str(&raw).with_context(|| format!("cannot parse {path}"))?;
            (file.a, file.b)
        }
        None => demo_posts(),
    };

    println!("CrowdTest-lite — ab-runner");
    println!("  platform:  {platform}");
    println!("  personas:  {} ({personas_path})", personas.len());
    println!("  rounds:    {rounds}");
    println!("  seed:      {seed}");
    println!();

    let output = run_simulation(&post_a, &post_b, platform, &personas, rounds, seed)?;

    print_summary(&output);
    print_age_band_breakdown(&output);
    print_advice(&output, platform);

    if let Some(path) = str_arg(&args, "--csv") {
        fs::write(path, render_csv(&output))
            .with_context(|| format!("cannot write CSV to {path}"))?;
        println!("rows written to {path}");
    }
    if let Some(path) = str_arg(&args, "--json") {
        let json = serde_json::to_string_pretty(&output.summary)?;
        fs::write(path, json).with_context(|| format!("cannot write summary to {path}"))?;
        println!("summary written to {path}");
    }

    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match args.windows(2).find(|w| w[0] == flag) {
        Some(w) => match w[1].parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("ignoring unparseable value '{}' for {flag}", w[1]);
                default
            }
        },
        None => default,
    }
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

/// The demo comparison shipped with the original dashboard.
fn demo_posts() -> (Post, Post) {
    let a = Post {
        thumb_desc: "明亮自然光下的 PSA10 卡牌近拍，背景是整齊擺放的福袋盒".into(),
        caption: "【限量 30 袋】⚡PSA10 寶可夢福袋回歸！每袋保證 1 張 PSA10 + 兩包卡包，今次仲有驚喜皮卡超等你開！🔥數量有限，快啲 DM 留名！".into(),
        hashtags: "#香港卡牌 #寶可夢 #PSA10 #香港福袋 #pokemonhk #卡牌收藏 #tcghk".into(),
    };
    let b = Post {
        thumb_desc: "桌面平拍 5 張 PSA10 卡牌疊在一起，旁邊擺有福袋與放大鏡".into(),
        caption: "PSA10 福袋登場🎉 1 袋入手 1 張 PSA10（保值收藏）+ 兩包卡包，總值高達 $700！💎 今次連稀有皮卡超都有機會抽中～".into(),
        hashtags: "#寶可夢卡 #香港卡牌 #PSA10 #tcg #香港寶可夢 #卡牌投資 #pokemonhk".into(),
    };
    (a, b)
}

fn print_summary(output: &SimulationOutput) {
    let s = &output.summary;
    let (ci_low, ci_high) = s.wilson_95ci_a;
    println!("== Result ==");
    println!(
        "  votes:       A={} B={} over {} trials",
        s.votes_a,
        s.votes_b,
        output.rows.len()
    );
    println!(
        "  win ratio A: {:6.2}%  (95% CI {:.1}% ~ {:.1}%)",
        s.vote_ratio_a * 100.0,
        ci_low * 100.0,
        ci_high * 100.0
    );
    println!("  win ratio B: {:6.2}%", s.vote_ratio_b * 100.0);
    println!();
    println!("  avg probability   like     comment  share    save");
    println!(
        "    A               {:.4}   {:.4}   {:.4}   {:.4}",
        s.avg_a.like_p, s.avg_a.comment_p, s.avg_a.share_p, s.avg_a.save_p
    );
    println!(
        "    B               {:.4}   {:.4}   {:.4}   {:.4}",
        s.avg_b.like_p, s.avg_b.comment_p, s.avg_b.share_p, s.avg_b.save_p
    );
    println!();
    for (label, cues) in [("A", &s.top_cues_a), ("B", &s.top_cues_b)] {
        let rendered = if cues.is_empty() {
            "(none)".to_string()
        } else {
            cues.iter()
                .map(|(cue, count)| format!("{cue}×{count}"))
                .collect::<Vec<_>>()
                .join("  ")
        };
        println!("  value cues {label}: {rendered}");
    }
    println!();
}

/// Vote split per age band, in first-seen band order.
fn print_age_band_breakdown(output: &SimulationOutput) {
    let mut bands: Vec<(String, u64, u64)> = Vec::new();
    for row in &output.rows {
        let idx = match bands.iter().position(|(band, _, _)| *band == row.age_band) {
            Some(i) => i,
            None => {
                bands.push((row.age_band.clone(), 0, 0));
                bands.len() - 1
            }
        };
        match row.vote {
            Vote::A => bands[idx].1 += 1,
            Vote::B => bands[idx].2 += 1,
        }
    }
    if bands.is_empty() {
        return;
    }

    println!("== Votes by age band ==");
    for (band, a, b) in &bands {
        let total = a + b;
        let ratio = *a as f64 / total as f64 * 100.0;
        println!("  {band:<6} A={a:<3} B={b:<3} ({ratio:.0}% A)");
    }
    println!();
}

/// Heuristic follow-up suggestions derived from the channel averages.
fn print_advice(output: &SimulationOutput, platform: Platform) {
    let s = &output.summary;
    let mut bullets: Vec<&str> = Vec::new();

    if s.avg_b.like_p > s.avg_a.like_p {
        bullets.push("Front-load B's value anchors (總值 / 保值 / 稀有) into A's first 125 characters.");
    }
    if s.avg_a.save_p > s.avg_b.save_p {
        bullets.push("Keep A's save-oriented lines (必收藏 / 攻略); they lift save probability.");
    }
    if s.avg_a.share_p + s.avg_b.share_p < 0.2 {
        bullets.push("Add a tag-a-friend or repost-draw CTA to lift shares.");
    }
    if platform == Platform::Ig && s.avg_a.like_p < s.avg_b.like_p {
        bullets.push("IG is thumbnail-led: try brighter close-ups with a clean background over dark or cluttered imagery.");
    }
    if bullets.is_empty() {
        bullets.push("The two versions are close; merge the winning elements into a third variant and rerun.");
    }

    println!("== Suggestions ==");
    for bullet in bullets {
        println!("  - {bullet}");
    }
}

/// Quote a CSV text field, doubling any embedded quotes.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// CSV rendering of the row sequence; column order matches the
/// original export. All text columns are quoted — persona ids come
/// from uploaded files and may themselves contain commas or quotes.
fn render_csv(output: &SimulationOutput) -> String {
    let mut csv = String::from(
        "persona_id,年齡段,興趣,round,vote,A_like_p,A_comment_p,A_share_p,A_save_p,B_like_p,B_comment_p,B_share_p,B_save_p\n",
    );
    for row in &output.rows {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
            csv_field(&row.persona_id),
            csv_field(&row.age_band),
            csv_field(&row.interests),
            row.round,
            row.vote,
            row.a_like_p,
            row.a_comment_p,
            row.a_share_p,
            row.a_save_p,
            row.b_like_p,
            row.b_comment_p,
            row.b_share_p,
            row.b_save_p,
        ));
    }
    csv
}
