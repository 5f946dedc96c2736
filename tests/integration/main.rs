mod export;
mod generation;
