use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::{self, DEFAULT_DIRECTION};
use crate::food::Food;
use crate::snake::{Direction, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    Running,
    GameOver,
}

/// What a single simulation step did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Moved,
    Ate,
    Crashed,
    Halted,
}

/// Everything the simulation owns between ticks. No IO happens here.
pub struct Session {
    snake: Snake,
    food: Food,
    score: u32,
    state: GameState,
    // Survives restarts; only a new process starts with the food visible
    blink: bool,
    rng: StdRng,
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let food = Food::new(&mut rng);
        Session {
            snake: Snake::new(config::origin(), DEFAULT_DIRECTION),
            food,
            score: 0,
            state: GameState::NotStarted,
            blink: false,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    #[cfg(test)]
    pub fn place_food(&mut self, x: i32, y: i32) {
        self.food = Food::at(x, y);
    }

    #[cfg(test)]
    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    /// First game of the process; the initial state is already fresh.
    pub fn start(&mut self) {
        info!("Game started");
        self.state = GameState::Running;
    }

    pub fn restart(&mut self) {
        self.snake.reset(config::origin(), DEFAULT_DIRECTION);
        self.food.relocate(&mut self.rng);
        self.score = 0;
        self.state = GameState::Running;
        info!("Game restarted");
    }

    pub fn turn(&mut self, direction: Direction) -> bool {
        self.snake.turn(direction)
    }

    pub fn step(&mut self) -> Step {
        if self.state != GameState::Running {
            return Step::Halted;
        }

        self.snake.advance();

        if self.snake.self_collision() {
            self.state = GameState::GameOver;
            info!("Game over with score {} and length {}", self.score, self.snake.len());
            return Step::Crashed;
        }

        if self.food.is_under(self.snake.head()) {
            self.snake.grow();
            self.food.relocate(&mut self.rng);
            self.score += 1;
            debug!("Ate food, score {}, next food at {:?}", self.score, self.food.position());
            return Step::Ate;
        }

        Step::Moved
    }

    /// Whether the food is drawn this tick. Alternates on every call.
    pub fn flash_food(&mut self) -> bool {
        let visible = !self.blink;
        self.blink = !self.blink;
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_FRAME_X, MAX_SNAKE_SIZE};
    use crate::position::Position;
    use crate::snake::Direction::*;

    fn running(seed: u64) -> Session {
        let mut session = Session::with_seed(seed);
        session.start();
        // Keep the food out of the snake's way unless a test puts it there
        session.place_food(100, 2);
        session
    }

    #[test]
    fn fresh_session_waits_to_start() {
        let mut session = Session::with_seed(1);
        assert_eq!(session.state(), GameState::NotStarted);
        assert_eq!(session.step(), Step::Halted);
        assert_eq!(session.snake().head(), config::origin());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn three_idle_ticks_move_three_cells_left() {
        let mut session = running(1);
        assert_eq!(session.snake().direction(), Left);

        for _ in 0..3 {
            assert_eq!(session.step(), Step::Moved);
        }
        assert_eq!(session.snake().head(), Position::new(17, 20));
        assert_eq!(session.snake().len(), 1);
    }

    #[test]
    fn idle_ticks_wrap_around_the_left_edge() {
        let mut session = running(1);
        for _ in 0..21 {
            session.step();
        }
        assert_eq!(session.snake().head(), Position::new(MAX_FRAME_X, 20));
    }

    #[test]
    fn eating_grows_scores_and_relocates_together() {
        let mut session = running(3);
        session.place_food(19, 20);

        assert_eq!(session.step(), Step::Ate);
        assert_eq!(session.snake().len(), 2);
        assert_eq!(session.score(), 1);

        session.place_food(100, 2);
        assert_eq!(session.step(), Step::Moved);
        let cells: Vec<_> = session.snake().body().iter().map(|p| p.cell()).collect();
        assert_eq!(cells, vec![(18, 20), (19, 20)]);
    }

    #[test]
    fn eaten_food_moves_away_from_the_head() {
        let mut moved = 0;
        for seed in 0..20 {
            let mut session = running(seed);
            session.place_food(19, 20);
            assert_eq!(session.step(), Step::Ate);
            if session.food().position() != Position::new(19, 20) {
                moved += 1;
            }
        }
        // A relocation may land on the same cell by chance, but not every time
        assert!(moved >= 19, "food stayed put in {} of 20 games", 20 - moved);
    }

    #[test]
    fn restart_relocates_the_food() {
        let mut moved = 0;
        for seed in 0..20 {
            let mut session = running(seed);
            session.place_food(100, 2);
            session.restart();
            if session.food().position() != Position::new(100, 2) {
                moved += 1;
            }
        }
        assert!(moved >= 19, "food stayed put in {} of 20 restarts", 20 - moved);
    }

    #[test]
    fn eating_at_capacity_still_scores() {
        let mut session = running(3);
        while session.snake_mut().grow() {}
        assert_eq!(session.snake().len(), MAX_SNAKE_SIZE);

        session.place_food(19, 20);
        assert_eq!(session.step(), Step::Ate);
        assert_eq!(session.snake().len(), MAX_SNAKE_SIZE);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn food_under_the_body_is_only_eaten_by_the_head() {
        let mut session = running(5);
        session.snake_mut().grow();
        session.snake_mut().grow();
        session.step();
        session.step();
        // Body is now (18,20) (19,20) (20,20)
        session.place_food(20, 20);

        session.turn(Up);
        assert_eq!(session.step(), Step::Moved);
        assert_eq!(session.score(), 0);
        assert_eq!(session.food().position(), Position::new(20, 20));

        session.turn(Right);
        session.step();
        session.step();
        session.turn(Down);
        assert_eq!(session.step(), Step::Ate);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn crash_skips_consumption_and_halts() {
        let mut session = running(9);
        for _ in 0..4 {
            session.snake_mut().grow();
        }
        for _ in 0..4 {
            session.step();
        }
        // Body runs (16,20)..(20,20); curl back onto it
        session.turn(Up);
        session.step();
        session.turn(Right);
        session.step();
        session.place_food(17, 20);
        session.turn(Down);

        assert_eq!(session.step(), Step::Crashed);
        assert_eq!(session.state(), GameState::GameOver);
        assert_eq!(session.score(), 0);
        assert_eq!(session.step(), Step::Halted);
    }

    #[test]
    fn restart_is_idempotent() {
        let mut session = running(11);
        session.place_food(19, 20);
        session.step();
        session.turn(Up);
        session.step();

        session.restart();
        let first = (session.snake().head(), session.snake().len(), session.score(), session.snake().direction());
        session.restart();
        let second = (session.snake().head(), session.snake().len(), session.score(), session.snake().direction());

        assert_eq!(first, second);
        assert_eq!(first, (config::origin(), 1, 0, Left));
        assert_eq!(session.state(), GameState::Running);
    }

    #[test]
    fn restart_drops_a_buffered_turn() {
        let mut session = running(13);
        session.turn(Up);
        session.restart();
        session.place_food(100, 2);
        session.step();
        assert_eq!(session.snake().head(), Position::new(19, 20));
    }

    #[test]
    fn blink_alternates_and_survives_restart() {
        let mut session = running(1);
        assert!(session.flash_food());
        assert!(!session.flash_food());
        assert!(session.flash_food());

        session.restart();
        assert!(!session.flash_food());
        assert!(session.flash_food());
    }
}
