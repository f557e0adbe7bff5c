pub const QUIZZES_PER_GAME: u64 = 10;
