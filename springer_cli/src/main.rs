//! CPU同士の対戦を持ち時間付きで実行する CLI。

use clap::{Parser, ValueEnum};
use springer_core::ai::types::Ai;
use springer_core::{ai, engine, logging};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// コマンドライン引数。
#[derive(Parser, Debug)]
#[command(name = "springer", version, about = "Knight's Isolation matches between CPU players")]
struct Args {
    /// 反復深化の上限深さ。
    #[arg(long, default_value_t = 10)]
    depth: u8,

    /// 先手のエージェント。
    #[arg(long, value_enum, default_value = "alphabeta")]
    first: AgentKind,

    /// 実行するゲーム数。
    #[arg(long, short = 'g', default_value_t = 1)]
    games: u32,

    /// ログを JSON 行で出力する。
    #[arg(long)]
    json: bool,

    /// 後手のエージェント。
    #[arg(long, value_enum, default_value = "random")]
    second: AgentKind,

    /// 乱数シード。
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// 1手あたりの持ち時間（ミリ秒）。
    #[arg(long, default_value_t = 150)]
    time_limit_ms: u64,

    /// デバッグログを有効にする。
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// エージェントの種類。
#[derive(Copy, Clone, Debug, ValueEnum)]
enum AgentKind {
    /// 反復深化アルファベータ探索。
    Alphabeta,
    /// 一様ランダム。
    Random,
}

/// ゲーム番号と手数から手ごとのシードを決定的に導出する。
fn move_seed(base: u64, game_index: u32, ply: u16) -> u64 {
    let mixed = base
        .wrapping_add(u64::from(game_index).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(u64::from(ply).wrapping_mul(0xBF58_476D_1CE4_E5B9));
    mixed ^ (mixed >> 31)
}

/// 1手分の探索をワーカースレッドで走らせ、持ち時間内に届いた最後の候補を返す。
///
/// 持ち時間が切れたら受信側を閉じる。ワーカーは次の候補を差し出した時点で
/// 打ち切りに気付いて止まるので、join せずに手放す。
fn decide_with_deadline<A>(
    mut agent: A,
    state: engine::State,
    budget: Duration,
) -> Option<engine::Square>
where
    A: Ai + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    let handle = thread::spawn(move || {
        let mut sink = sender;
        agent.decide(state, &mut sink);
    });

    let deadline = Instant::now() + budget;
    let mut chosen: Option<engine::Square> = None;

    loop {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        match receiver.recv_timeout(deadline - now) {
            Ok(mv) => chosen = Some(mv),
            Err(mpsc::RecvTimeoutError::Timeout | mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(receiver);
    drop(handle);

    chosen
}

/// 指定された種類のエージェントで1手決める。
fn decide_move(
    kind: AgentKind,
    depth: u8,
    seed: u64,
    state: engine::State,
    budget: Duration,
) -> Option<engine::Square> {
    match kind {
        AgentKind::Alphabeta => {
            let limits = ai::alphabeta::SearchLimits::new(depth, true);
            decide_with_deadline(ai::alphabeta::Agent::with_limits(limits, seed), state, budget)
        }
        AgentKind::Random => decide_with_deadline(ai::random::Agent::new(seed), state, budget),
    }
}

/// 1ゲームを最後まで実行し、勝者を返す。
fn run_game(args: &Args, game_index: u32) -> Option<engine::Player> {
    let mut game = engine::Game::initial();
    let budget = Duration::from_millis(args.time_limit_ms);

    // 1手ごとに1マスふさがるため、117手を超えて続くことはない。
    for ply in 0_u16..200 {
        if game.is_game_over() {
            break;
        }

        let state = game.state();
        let side = game.side_to_move();
        let kind = match side {
            engine::Player::First => args.first,
            engine::Player::Second => args.second,
            _ => args.first,
        };

        let seed = move_seed(args.seed, game_index, ply);
        let mv = match decide_move(kind, args.depth, seed, state, budget) {
            Some(value) => value,
            None => {
                // 持ち時間内に候補を出せなければ手番側の負け。
                tracing::warn!("game {game_index}: {side:?} produced no move in time, forfeits");
                return Some(side.opponent());
            }
        };

        tracing::debug!("game {game_index} ply {ply}: {side:?} plays {mv:?}");

        match game.play(mv) {
            Ok(engine::GameStatus::GameOver { winner }) => {
                tracing::info!(
                    "game {game_index} over after {} plies: winner={winner:?}",
                    game.state().ply_count()
                );
                return Some(winner);
            }
            Ok(_) => {}
            Err(err) => {
                tracing::error!("game {game_index}: {side:?} played illegal move: {err:?}");
                return Some(side.opponent());
            }
        }
    }

    match game.status() {
        engine::GameStatus::GameOver { winner } => Some(winner),
        _ => None,
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let init_result = if args.json {
        logging::init_json(level)
    } else {
        logging::init(level)
    };
    if let Err(err) = init_result {
        eprintln!("failed to initialize logging: {err}");
    }

    let mut first_wins = 0_u32;
    let mut second_wins = 0_u32;

    for game_index in 0..args.games {
        match run_game(&args, game_index) {
            Some(engine::Player::First) => first_wins += 1,
            Some(engine::Player::Second) => second_wins += 1,
            Some(_) => {}
            None => tracing::warn!("game {game_index} did not finish"),
        }
    }

    tracing::info!(
        "finished {} games: first_wins={first_wins} second_wins={second_wins}",
        args.games
    );
}
