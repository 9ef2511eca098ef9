//! 結合テスト: CPU同士の対戦が終局まで進むことを確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use springer_core::ai::types::Ai;
    use springer_core::{ai, engine};

    /// 両者のナイトを配置した直後の局面を作る。
    fn place_both_knights() -> Option<engine::Game> {
        let first = match engine::Square::from_xy(3, 3) {
            Some(value) => value,
            None => return None,
        };
        let second = match engine::Square::from_xy(9, 5) {
            Some(value) => value,
            None => return None,
        };

        let mut game = engine::Game::initial();
        if game.play(first).is_err() {
            return None;
        }
        if game.play(second).is_err() {
            return None;
        }
        Some(game)
    }

    /// `alphabeta` が合法手のみ選ぶことを確認する。
    #[test]
    fn alphabeta_selects_legal_move() {
        let game_opt = place_both_knights();
        assert!(game_opt.is_some(), "placement must succeed");
        let game = match game_opt {
            Some(value) => value,
            None => return,
        };

        let state = game.state();
        let legal = state.liberties(state.loc(state.player()));
        assert!(legal != u128::MIN, "placed knight must have moves");

        let limits = ai::alphabeta::SearchLimits::new(3, true);
        let mut agent = ai::alphabeta::Agent::with_limits(limits, 3);
        let mv_opt = agent.select_move(state);
        assert!(mv_opt.is_some(), "alphabeta must move in a live position");

        let mv = match mv_opt {
            Some(value) => value,
            None => return,
        };
        assert!(
            legal & mv.bit() != u128::MIN,
            "alphabeta must select a legal move, got={mv:?}"
        );
    }

    /// 候補手が深さごとにチャンネル越しに届くことを確認する。
    #[test]
    fn decide_streams_candidates_over_channel() {
        let game_opt = place_both_knights();
        assert!(game_opt.is_some(), "placement must succeed");
        let game = match game_opt {
            Some(value) => value,
            None => return,
        };
        let state = game.state();

        let depth = 3_u8;
        let limits = ai::alphabeta::SearchLimits::new(depth, true);
        let (sender, receiver) = std::sync::mpsc::channel();
        let handle = std::thread::spawn(move || {
            let mut agent = ai::alphabeta::Agent::with_limits(limits, 5);
            let mut sink = sender;
            agent.decide(state, &mut sink);
        });

        let mut received: Vec<engine::Square> = Vec::new();
        while let Ok(mv) = receiver.recv() {
            received.push(mv);
        }
        assert!(handle.join().is_ok(), "search thread panicked");

        assert_eq!(received.len(), usize::from(depth));

        let legal = state.liberties(state.loc(state.player()));
        for mv in received {
            assert!(
                legal & mv.bit() != u128::MIN,
                "streamed move must be legal, got={mv:?}"
            );
        }
    }

    /// 1ゲームを最後まで進める。終局したら勝者の整合を確認する。
    fn run_until_game_over(
        mut game: engine::Game,
        first_agent: &mut dyn Ai,
        second_agent: &mut dyn Ai,
    ) {
        // 1手ごとに1マスふさがるため、117手を超えて続くことはない。
        for _turn in u16::MIN..200 {
            let state = game.state();

            let mv_opt = match game.side_to_move() {
                engine::Player::First => first_agent.select_move(state),
                engine::Player::Second => second_agent.select_move(state),
                _ => None,
            };

            let mv = match mv_opt {
                Some(value) => value,
                None => {
                    // 動けない＝終局しているはず。
                    assert!(game.is_game_over(), "agent found no move in a live position");
                    return;
                }
            };

            let play_result = game.play(mv);
            assert!(play_result.is_ok(), "play must succeed, got={play_result:?}");

            let status = match play_result {
                Ok(value) => value,
                Err(_err) => return,
            };

            if let engine::GameStatus::GameOver { winner } = status {
                assert!(
                    game.state().ply_count() <= 117,
                    "ply count exceeded the board size"
                );
                assert_eq!(
                    winner,
                    game.side_to_move().opponent(),
                    "winner must be the opponent of the stuck player"
                );
                return;
            }
        }

        let status = game.status();
        assert!(
            matches!(status, engine::GameStatus::GameOver { .. }),
            "game did not finish within turn limit, status={status:?}"
        );
    }

    /// `random vs alphabeta` で終局することを確認する。
    fn play_game_random_vs_alphabeta(seed_random: u64, depth: u8, seed_search: u64) {
        let limits = ai::alphabeta::SearchLimits::new(depth, true);
        let mut first_agent = ai::random::Agent::new(seed_random);
        let mut second_agent = ai::alphabeta::Agent::with_limits(limits, seed_search);
        run_until_game_over(engine::Game::initial(), &mut first_agent, &mut second_agent);
    }

    /// `random` 同士で終局することを確認する。
    fn play_game_random_vs_random(seed_first: u64, seed_second: u64) {
        let mut first_agent = ai::random::Agent::new(seed_first);
        let mut second_agent = ai::random::Agent::new(seed_second);
        run_until_game_over(engine::Game::initial(), &mut first_agent, &mut second_agent);
    }

    /// `random vs alphabeta` が終局まで進む。
    #[test]
    fn random_vs_alphabeta_finishes() {
        play_game_random_vs_alphabeta(u64::MIN, u8::MIN.wrapping_add(1), u64::MIN);
        play_game_random_vs_alphabeta(42, 3, 0);
    }

    /// `random` 同士が終局まで進む。
    #[test]
    fn random_vs_random_finishes() {
        play_game_random_vs_random(u64::MIN, u64::MIN.wrapping_add(1));
        play_game_random_vs_random(42, 4242);
    }
}
