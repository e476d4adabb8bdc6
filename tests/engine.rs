use cherry_snake::{
    Cell, Direction, GameConfig, GameStatus, MovePolicy, MoveResult, Rejection, SnakeGame,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

fn default_game(seed: u64) -> SnakeGame {
    SnakeGame::new(GameConfig::default().with_seed(seed)).unwrap()
}

#[test]
fn initial_snake_is_centred_and_contiguous() {
    let game = default_game(42);
    let snap = game.snapshot();

    let expected: Vec<Cell> = (38..=42).rev().map(|x| Cell::new(x, 12)).collect();
    assert_eq!(snap.body, expected);
    assert_eq!(snap.eaten, 0);
    assert!(!snap.body.contains(&snap.cherry));
    assert!(snap.body.windows(2).all(|w| w[0].is_adjacent(w[1])));
    assert!(game.is_legal());
}

#[test]
fn walk_eat_and_refuse_reversal() {
    let mut game = default_game(7);
    game.place_cherry(Cell::new(1, 1)).unwrap();

    let res = game.advance(Direction::Right).unwrap();
    assert_eq!(
        res,
        MoveResult::Moved {
            new_head: Cell::new(43, 12),
            old_head: Cell::new(42, 12),
            old_tail: Some(Cell::new(38, 12)),
        }
    );
    assert_eq!(game.body().len(), 5);

    game.place_cherry(Cell::new(44, 12)).unwrap();
    let res = game.advance(Direction::Right).unwrap();
    assert!(res.grew());
    assert_eq!(game.body().head(), Cell::new(44, 12));
    assert_eq!(game.eaten_count(), 1);
    assert_eq!(game.body().len(), 6);
    assert!(!game.body().contains(game.cherry(), false));

    let before = game.snapshot();
    assert_eq!(
        game.advance(Direction::Left).unwrap(),
        MoveResult::Ignored(Rejection::Reversal)
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn random_play_keeps_invariants() {
    for seed in 0..8 {
        let config = GameConfig::new(12, 8).with_seed(seed);
        let mut game = SnakeGame::new(config).unwrap();
        let mut rng = StdRng::seed_from_u64(seed + 100);
        let mut last_eaten = 0;

        for _ in 0..2_000 {
            let len_before = game.body().len();
            let head_before = game.body().head();
            let direction = *DIRECTIONS.choose(&mut rng).unwrap();

            let res = match game.advance(direction) {
                Ok(res) => res,
                // The snake filled the board
                Err(_) => break,
            };

            match res {
                MoveResult::Moved { old_tail: None, .. } => {
                    assert_eq!(game.body().len(), len_before + 1)
                }
                MoveResult::Moved { .. } => assert_eq!(game.body().len(), len_before),
                MoveResult::Ignored(_) => {
                    assert_eq!(game.body().len(), len_before);
                    assert_eq!(game.body().head(), head_before);
                }
            }

            assert!(game.is_legal());
            assert_eq!(game.status(), GameStatus::Running);
            assert!(!game.body().contains(game.cherry(), false));
            assert!(game.eaten_count() >= last_eaten);
            last_eaten = game.eaten_count();
        }
    }
}

#[test]
fn permissive_play_ends_once_illegal() {
    let config = GameConfig::new(12, 8).with_policy(MovePolicy::Permissive).with_seed(9);
    let mut game = SnakeGame::new(config).unwrap();

    // Head starts at (8, 4); four steps up leave the interior
    for _ in 0..4 {
        game.advance(Direction::Up).unwrap();
    }
    assert!(!game.is_legal());
    assert_eq!(game.status(), GameStatus::Ended);
    assert_eq!(game.body().head(), Cell::new(8, 0));

    let eaten = game.eaten_count();
    assert_eq!(
        game.advance(Direction::Left).unwrap(),
        MoveResult::Ignored(Rejection::Ended)
    );
    assert_eq!(game.eaten_count(), eaten);
}

#[test]
fn grid_size_is_not_hard_coded() {
    let game = SnakeGame::new(GameConfig::new(30, 15).with_seed(1)).unwrap();
    assert_eq!(game.body().head(), Cell::new(17, 7));
    assert_eq!(game.body().tail(), Cell::new(13, 7));
}
