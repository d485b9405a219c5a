// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Prompt rendering for route recommendations.
//!
//! Rendering is deterministic and never fails: any missing field is
//! replaced by a placeholder.

use crate::models::{scalar_text, Outing, RouteCatalogue};
use regex::Regex;
use serde_json::Value;
use std::fmt::Write;
use std::sync::LazyLock;

/// Placeholder for missing scalar fields.
pub const MISSING: &str = "N/A";
/// Placeholder for a missing or empty activity list.
pub const UNKNOWN_ACTIVITY: &str = "Unknown";
/// Placeholder for a route without a name.
pub const UNNAMED_ROUTE: &str = "Unnamed";

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

/// Instructions sent as the system message.
pub fn system_prompt(athlete: &str) -> String {
    format!(
        "\
You are a virtual mountain guide and an expert at recommending mountain sport
routes (rock climbing, via ferrata, mountaineering...).

Your task:
1. Analyse the outing history of the user ({athlete}).
2. Select **exactly 3 routes** among **those {athlete} has not done yet**.
3. For each route, write **5 to 6** detailed sentences covering:
   - Why this route is an interesting new experience for {athlete}.
   - Ideal conditions (season, time of day, recommended gear).
   - Approximate duration and level of commitment.
   - A personal tip to make the most of it.

Mandatory selection criteria:
- **Exact ID**: always quote the route ID exactly as it appears in the list.
- **Diversity**: pick at least one route easier and one route harder than {athlete}'s average.
- **Activity type**: vary the activities already practised, possibly introducing a new one.
- **Difficulty**: stay within ±1 level of {athlete}'s average difficulty.
- **Elevation gain**: stay within ±200 m of {athlete}'s average elevation gain.

Output format (plain text):
For each route:
1. Route ID – Route name (activity, difficulty, elevation gain m)
   5–6 detailed sentences.

After the 3 recommendations, add a **4 to 5 sentence conclusion** on the
discovery strategy and how these routes enrich {athlete}'s outing history.
Provide **nothing else**."
    )
}

/// User message: outing history followed by the candidate routes.
pub fn user_prompt(athlete: &str, outings: &[Outing], routes: &RouteCatalogue) -> String {
    format!(
        "{}\n\n{}",
        render_outings_summary(athlete, outings).trim_end(),
        render_routes_catalogue(routes).trim_end()
    )
}

/// One line per outing: route id, activities, raw timestamp.
pub fn render_outings_summary(athlete: &str, outings: &[Outing]) -> String {
    let mut out = format!("Outing history of {}:\n", athlete);

    for outing in outings {
        let route_id = outing
            .route_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| MISSING.to_string());
        let date = scalar_or_missing(outing.date.as_ref());

        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "- Route ID: {}, Activity: {}, Date (Unix ts): {}",
            route_id,
            join_activities(outing.activities.as_deref()),
            date
        );
    }

    out
}

/// One line per route: id, name, activities, elevation gain, difficulty.
pub fn render_routes_catalogue(routes: &RouteCatalogue) -> String {
    let mut out = String::from("Routes available for recommendation:\n");

    for (route_id, route) in routes {
        let _ = writeln!(
            out,
            "- Route ID: {}, Name: {}, Activity: {}, Elevation gain: {} m, Difficulty: {}",
            route_id,
            route.name.as_deref().unwrap_or(UNNAMED_ROUTE),
            join_activities(route.activities.as_deref()),
            scalar_or_missing(route.height_diff_up()),
            scalar_or_missing(route.global_rating()),
        );
    }

    out
}

/// Remove `**bold**` markup, keeping the enclosed text.
pub fn strip_emphasis(text: &str) -> String {
    BOLD.replace_all(text, "$1").into_owned()
}

fn join_activities(activities: Option<&[String]>) -> String {
    match activities {
        Some(list) if !list.is_empty() => list.join(", "),
        _ => UNKNOWN_ACTIVITY.to_string(),
    }
}

fn scalar_or_missing(value: Option<&Value>) -> String {
    value.map(scalar_text).unwrap_or_else(|| MISSING.to_string())
}
