use diceboard_game::{
    BOARD_LEN, MultiplierPlan, Space, compute_best_multipliers, simulate_run, standard_board,
    trial_rng,
};

#[test]
fn assignment_is_board_length_and_budget_valued() {
    let board = standard_board();
    for budget in [2, 3, 5, 10] {
        let assignment = compute_best_multipliers(&board, budget);
        assert_eq!(assignment.len(), BOARD_LEN);
        assert!(assignment.iter().all(|&m| m == 1 || m == budget));
    }
}

#[test]
fn worthless_board_gets_no_boosts() {
    let board = [Space::present(); BOARD_LEN];
    assert_eq!(compute_best_multipliers(&board, 10), [1; BOARD_LEN]);
}

#[test]
fn gems_do_not_attract_boosts() {
    // Gems carry no points and no dice, so a gems-only board scores zero
    // everywhere and the optimizer leaves it alone.
    let board = [Space::flat_gems(50); BOARD_LEN];
    assert_eq!(compute_best_multipliers(&board, 10), [1; BOARD_LEN]);
}

#[test]
fn optimized_plan_outscores_the_unboosted_plan_in_simulation() {
    let board = standard_board();
    let best = MultiplierPlan::optimized("best", &board);
    let ones = MultiplierPlan::uniform("ones", [1; BOARD_LEN]);

    let trials = 400_u64;
    let mut best_points = 0_u64;
    let mut ones_points = 0_u64;
    for trial in 0..trials {
        let mut rng = trial_rng(0x0B75, trial);
        best_points += simulate_run(&board, &best, 130, None, false, &mut rng)
            .state
            .points;
        let mut rng = trial_rng(0x0B75, trial + trials);
        ones_points += simulate_run(&board, &ones, 130, None, false, &mut rng)
            .state
            .points;
    }
    // The boosted plan should at minimum hold its own against unboosted
    // play over a sizable seeded sample.
    assert!(
        best_points * 10 >= ones_points * 9,
        "optimized plan underperformed: {best_points} vs {ones_points}"
    );
}
