//! Built-in catalog: ten blocks, four levels, seven equipment types.
//!
//! Rep counts and durations follow common studio guidelines; duration is the
//! nominal time for the full set of reps.

use super::model::{Block, BlockKind, CatalogDocument, Equipment, Item, Level};

pub(crate) fn document() -> CatalogDocument {
    CatalogDocument {
        floor: "mat".to_string(),
        equipment: equipment(),
        blocks: blocks(),
        levels: levels(),
        items: items(),
    }
}

fn equipment() -> Vec<Equipment> {
    [
        ("reformer", "Reformer"),
        ("chair", "Chair"),
        ("springboard", "Springboard"),
        ("mat", "Mat"),
        ("trx", "TRX"),
        ("bosu", "BOSU"),
        ("barrel", "Barrel"),
    ]
    .iter()
    .map(|(id, name)| Equipment {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

fn blocks() -> Vec<Block> {
    [
        ("footwork", "Footwork", BlockKind::Opening, 5.0),
        ("bridges", "Bridges", BlockKind::Reorderable, 5.0),
        ("abdominals", "Abdominals", BlockKind::Reorderable, 7.0),
        ("plank", "Plank", BlockKind::Reorderable, 5.0),
        ("upper_body", "Upper Body", BlockKind::Reorderable, 7.0),
        ("lower_body", "Lower Body", BlockKind::Reorderable, 7.0),
        ("lateral_line", "Lateral Line", BlockKind::Reorderable, 5.0),
        ("prone_extension", "Prone/Extension", BlockKind::Reorderable, 5.0),
        ("full_body", "Full Body Integration", BlockKind::Reorderable, 5.0),
        ("stretch", "Stretch", BlockKind::Closing, 5.0),
    ]
    .iter()
    .map(|(id, name, kind, typical_minutes)| Block {
        id: id.to_string(),
        name: name.to_string(),
        kind: *kind,
        typical_minutes: *typical_minutes,
    })
    .collect()
}

fn levels() -> Vec<Level> {
    [
        ("beginner", "Beginner (Level 1)", 1.0, 1.2, 0.8, 6),
        ("intermediate", "Intermediate (Level 1.5)", 1.5, 1.0, 1.0, 6),
        ("advanced", "Advanced (Level 2)", 2.0, 0.85, 1.15, 6),
        ("advanced_plus", "Advanced+ (Level 2.5)", 2.5, 0.75, 1.25, 8),
    ]
    .iter()
    .map(
        |(id, name, rank, rep_multiplier, item_count_multiplier, max_transitions)| Level {
            id: id.to_string(),
            name: name.to_string(),
            rank: *rank,
            rep_multiplier: *rep_multiplier,
            item_count_multiplier: *item_count_multiplier,
            max_transitions: *max_transitions,
        },
    )
    .collect()
}

fn items() -> Vec<Item> {
    vec![
        // footwork
        Item::new(
            "fw_heels_bilateral",
            "Heels - Bilateral",
            "footwork",
            &["reformer", "chair"],
            "beginner",
            "3R or 2R+1B",
            10,
            45,
        )
        .with_variants(&["Parallel", "V Position", "Wide", "Narrow"]),
        Item::new(
            "fw_toes_bilateral",
            "Toes - Bilateral",
            "footwork",
            &["reformer", "chair"],
            "beginner",
            "3R or 2R+1B",
            10,
            45,
        )
        .with_variants(&["Parallel", "V Position", "Wide", "Narrow"]),
        Item::new(
            "fw_arches",
            "Arches",
            "footwork",
            &["reformer", "chair"],
            "beginner",
            "3R or 2R+1B",
            10,
            45,
        ),
        Item::new(
            "fw_single_leg",
            "Single Leg Footwork",
            "footwork",
            &["reformer", "chair"],
            "intermediate",
            "2R or 1R+1B",
            8,
            60,
        )
        .with_variants(&["Toe Tap", "Ball & Socket", "Leg & Leg", "Develope", "Circles"]),
        Item::new(
            "fw_standing",
            "Standing Footwork",
            "footwork",
            &["springboard"],
            "beginner",
            "",
            10,
            60,
        ),
        Item::new(
            "fw_side_lying",
            "Side Lying Footwork",
            "footwork",
            &["reformer"],
            "intermediate",
            "1R+1B",
            8,
            60,
        )
        .with_variants(&["Parallel", "External Rotation", "Internal Rotation", "High Half Toe"]),

        // bridges
        Item::new(
            "br_articulating",
            "Articulating Bridge",
            "bridges",
            &["mat"],
            "beginner",
            "",
            5,
            60,
        ),
        Item::new(
            "br_pelvic_lift",
            "Pelvic Lift/Hinge Bridge",
            "bridges",
            &["mat"],
            "beginner",
            "",
            5,
            45,
        ),
        Item::new(
            "br_single_leg",
            "Single Leg Bridge",
            "bridges",
            &["mat"],
            "advanced",
            "",
            5,
            60,
        ),
        Item::new(
            "br_shoulder_bridge",
            "Shoulder Bridge",
            "bridges",
            &["mat", "reformer"],
            "intermediate",
            "1R+1B",
            3,
            60,
        ),
        Item::new(
            "br_reformer_bilateral",
            "Bridge - Bilateral",
            "bridges",
            &["reformer"],
            "beginner",
            "1R+1B",
            5,
            60,
        )
        .with_variants(&["Heels", "Toes", "Arches"])
        .with_props(&["Magic Circle", "Ball", "Dumbbell", "Band"]),
        Item::new(
            "br_reformer_unilateral",
            "Bridge - Unilateral",
            "bridges",
            &["reformer"],
            "intermediate",
            "1R+1B",
            5,
            60,
        )
        .with_variants(&["Marches", "Hip Drops", "Leg Circle"]),
        Item::new(
            "br_hamstring_curl",
            "Heels on Hamstring Curl",
            "bridges",
            &["chair"],
            "intermediate",
            "2@2",
            5,
            60,
        ),
        Item::new(
            "br_pedal_bridge",
            "Bridge with Feet on Pedal",
            "bridges",
            &["chair"],
            "intermediate",
            "2@2",
            5,
            60,
        ),
        Item::new(
            "br_frog_back",
            "Frog Back",
            "bridges",
            &["chair"],
            "intermediate",
            "2@2",
            5,
            60,
        ),
        Item::new(
            "br_trx_hip_lift",
            "TRX Hip Lift",
            "bridges",
            &["trx"],
            "intermediate",
            "",
            5,
            60,
        ),

        // abdominals
        Item::new(
            "ab_hundred_prep",
            "Hundred Prep",
            "abdominals",
            &["mat", "reformer"],
            "beginner",
            "1R or 1B",
            5,
            60,
        ),
        Item::new(
            "ab_chest_lift",
            "Chest Lift",
            "abdominals",
            &["mat", "reformer"],
            "beginner",
            "1R",
            8,
            45,
        ),
        Item::new(
            "ab_supine_twist",
            "Supine Twist",
            "abdominals",
            &["mat"],
            "beginner",
            "",
            5,
            45,
        ),
        Item::new(
            "ab_dead_bug",
            "Dead Bug",
            "abdominals",
            &["mat"],
            "beginner",
            "",
            8,
            60,
        ),
        Item::new(
            "ab_hundred",
            "Hundred",
            "abdominals",
            &["mat", "reformer"],
            "intermediate",
            "1R or 1B",
            10,
            90,
        ),
        Item::new(
            "ab_roll_up",
            "Roll Up",
            "abdominals",
            &["mat", "reformer"],
            "intermediate",
            "1R",
            5,
            60,
        ),
        Item::new(
            "ab_series_five",
            "Series of Five",
            "abdominals",
            &["mat"],
            "intermediate",
            "",
            10,
            120,
        ),
        Item::new(
            "ab_coordination",
            "Coordination",
            "abdominals",
            &["reformer"],
            "intermediate",
            "1R+1B",
            5,
            60,
        ),
        Item::new(
            "ab_teaser",
            "Teaser",
            "abdominals",
            &["mat", "reformer"],
            "intermediate",
            "1R",
            3,
            60,
        ),
        Item::new(
            "ab_criss_cross",
            "Criss Cross",
            "abdominals",
            &["mat"],
            "intermediate",
            "",
            8,
            60,
        ),
        Item::new(
            "ab_short_box_round",
            "Short Box - Round Back",
            "abdominals",
            &["reformer"],
            "intermediate",
            "1R",
            5,
            60,
        )
        .auxiliary(),
        Item::new(
            "ab_short_box_flat",
            "Short Box - Flat Back",
            "abdominals",
            &["reformer"],
            "intermediate",
            "1R",
            5,
            60,
        )
        .auxiliary(),
        Item::new(
            "ab_short_box_twist",
            "Short Box - Twist",
            "abdominals",
            &["reformer"],
            "intermediate",
            "1R",
            5,
            60,
        )
        .auxiliary(),
        Item::new(
            "ab_short_box_side",
            "Short Box - Side to Side",
            "abdominals",
            &["reformer"],
            "intermediate",
            "1R",
            5,
            60,
        )
        .auxiliary(),

        // plank
        Item::new(
            "pl_front_plank",
            "Front Plank",
            "plank",
            &["mat"],
            "beginner",
            "",
            3,
            30,
        ),
        Item::new(
            "pl_knee_stretch",
            "Knee Stretch",
            "plank",
            &["reformer"],
            "beginner",
            "1R+1B",
            8,
            45,
        ),
        Item::new(
            "pl_long_stretch",
            "Long Stretch",
            "plank",
            &["reformer"],
            "intermediate",
            "1R+1B",
            5,
            45,
        ),
        Item::new(
            "pl_up_stretch",
            "Up Stretch",
            "plank",
            &["reformer"],
            "advanced",
            "1R+1B",
            5,
            45,
        ),
        Item::new(
            "pl_elephant",
            "Elephant",
            "plank",
            &["reformer"],
            "intermediate",
            "1R+1B",
            5,
            45,
        ),
        Item::new(
            "pl_pike",
            "Pike",
            "plank",
            &["chair", "mat"],
            "intermediate",
            "1@2",
            5,
            45,
        ),
        Item::new(
            "pl_mountain_climber",
            "Mountain Climber",
            "plank",
            &["chair"],
            "intermediate",
            "1@2",
            8,
            45,
        ),

        // upper_body
        Item::new(
            "ub_arm_circles",
            "Arm Circles",
            "upper_body",
            &["mat"],
            "beginner",
            "",
            10,
            45,
        ),
        Item::new(
            "ub_arm_work",
            "Arm Work Series",
            "upper_body",
            &["reformer"],
            "beginner",
            "1R or 1B",
            10,
            90,
        )
        .with_variants(&["Biceps", "Triceps", "Chest", "Back"]),
        Item::new(
            "ub_chest_expansion",
            "Chest Expansion",
            "upper_body",
            &["reformer", "springboard"],
            "beginner",
            "1R",
            5,
            45,
        ),
        Item::new(
            "ub_rowing",
            "Rowing Series",
            "upper_body",
            &["reformer"],
            "intermediate",
            "1R",
            5,
            90,
        )
        .auxiliary(),
        Item::new(
            "ub_hug_a_tree",
            "Hug a Tree",
            "upper_body",
            &["reformer", "springboard"],
            "beginner",
            "1R",
            8,
            45,
        ),
        Item::new(
            "ub_push_ups",
            "Push Ups",
            "upper_body",
            &["mat", "chair"],
            "intermediate",
            "",
            3,
            45,
        ),
        Item::new(
            "ub_trx_rows",
            "TRX Rows",
            "upper_body",
            &["trx"],
            "intermediate",
            "",
            8,
            45,
        ),

        // lower_body
        Item::new(
            "lb_leg_circles",
            "Leg Circles",
            "lower_body",
            &["mat", "reformer"],
            "beginner",
            "2R",
            5,
            60,
        ),
        Item::new(
            "lb_leg_press",
            "Leg Press",
            "lower_body",
            &["springboard"],
            "beginner",
            "",
            10,
            60,
        ),
        Item::new(
            "lb_standing_leg",
            "Standing Leg Series",
            "lower_body",
            &["reformer", "chair"],
            "intermediate",
            "1R+1B",
            8,
            90,
        ),
        Item::new(
            "lb_side_splits",
            "Side Splits",
            "lower_body",
            &["reformer"],
            "intermediate",
            "1R",
            5,
            60,
        ),
        Item::new(
            "lb_lunges",
            "Lunges",
            "lower_body",
            &["reformer", "chair"],
            "intermediate",
            "1R+1B",
            5,
            60,
        ),
        Item::new(
            "lb_scooter",
            "Scooter",
            "lower_body",
            &["reformer"],
            "beginner",
            "1R+1B",
            8,
            45,
        ),

        // lateral_line
        Item::new(
            "ll_side_lying",
            "Side Lying Series",
            "lateral_line",
            &["mat", "reformer"],
            "beginner",
            "1R",
            8,
            90,
        ),
        Item::new(
            "ll_mermaid",
            "Mermaid",
            "lateral_line",
            &["reformer", "mat", "chair"],
            "beginner",
            "1R",
            5,
            60,
        ),
        Item::new(
            "ll_side_bend",
            "Side Bend",
            "lateral_line",
            &["mat"],
            "intermediate",
            "",
            5,
            45,
        ),
        Item::new(
            "ll_kneeling_side",
            "Kneeling Side Kicks",
            "lateral_line",
            &["reformer"],
            "intermediate",
            "1R",
            8,
            60,
        ),

        // prone_extension
        Item::new(
            "pe_swan",
            "Swan",
            "prone_extension",
            &["mat", "reformer"],
            "intermediate",
            "1B",
            5,
            45,
        ),
        Item::new(
            "pe_swimming",
            "Swimming",
            "prone_extension",
            &["mat"],
            "beginner",
            "",
            5,
            45,
        ),
        Item::new(
            "pe_pulling_straps",
            "Pulling Straps",
            "prone_extension",
            &["reformer"],
            "beginner",
            "1R",
            5,
            60,
        )
        .auxiliary(),
        Item::new(
            "pe_back_extension",
            "Back Extension",
            "prone_extension",
            &["chair", "barrel"],
            "intermediate",
            "1@2",
            5,
            60,
        ),
        Item::new(
            "pe_rocking",
            "Rocking",
            "prone_extension",
            &["mat"],
            "intermediate",
            "",
            5,
            45,
        ),

        // full_body
        Item::new(
            "fb_single_leg_stretch",
            "Single Leg Stretch",
            "full_body",
            &["mat"],
            "beginner",
            "",
            8,
            60,
        ),
        Item::new(
            "fb_rolling_like_ball",
            "Rolling Like a Ball",
            "full_body",
            &["mat"],
            "beginner",
            "",
            6,
            45,
        ),
        Item::new(
            "fb_full_body_stretch",
            "Full Body Stretch (Reformer)",
            "full_body",
            &["reformer"],
            "beginner",
            "1R",
            5,
            60,
        ),
        Item::new(
            "fb_control_balance",
            "Control Balance",
            "full_body",
            &["mat"],
            "advanced",
            "",
            3,
            60,
        ),
        Item::new(
            "fb_star",
            "Star",
            "full_body",
            &["reformer"],
            "advanced",
            "1R",
            3,
            45,
        ),
        Item::new(
            "fb_snake_twist",
            "Snake/Twist",
            "full_body",
            &["reformer"],
            "advanced",
            "1R+1B",
            3,
            60,
        ),
        Item::new(
            "fb_balance_control",
            "Balance Control",
            "full_body",
            &["reformer", "chair"],
            "advanced",
            "1R",
            3,
            60,
        ),
        Item::new(
            "fb_burpees",
            "Pilates Burpees",
            "full_body",
            &["mat"],
            "intermediate",
            "",
            5,
            60,
        ),

        // stretch
        Item::new(
            "st_hip_flexor",
            "Hip Flexor Stretch",
            "stretch",
            &["mat", "reformer"],
            "beginner",
            "1B or none",
            3,
            60,
        ),
        Item::new(
            "st_hamstring",
            "Hamstring Stretch",
            "stretch",
            &["mat", "reformer", "springboard"],
            "beginner",
            "1B or none",
            3,
            60,
        ),
        Item::new(
            "st_mermaid_stretch",
            "Mermaid Stretch",
            "stretch",
            &["mat", "reformer"],
            "beginner",
            "1R",
            5,
            45,
        ),
        Item::new(
            "st_spine_stretch",
            "Spine Stretch Forward",
            "stretch",
            &["mat"],
            "beginner",
            "",
            5,
            45,
        ),
        Item::new(
            "st_cat_cow",
            "Cat/Cow",
            "stretch",
            &["mat"],
            "beginner",
            "",
            5,
            45,
        ),
        Item::new(
            "st_childs_pose",
            "Child's Pose",
            "stretch",
            &["mat"],
            "beginner",
            "",
            1,
            30,
        ),
    ]
}
