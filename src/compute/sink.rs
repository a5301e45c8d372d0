//! Frame sinks: consumers of the state grid after each step.

use super::Grid;

/// Receives every frame the engine produces.
///
/// Renderers and recorders live outside this crate; they only see the grid.
pub trait FrameSink {
    fn present(&mut self, step: u64, frame: &Grid);
}

impl<F> FrameSink for F
where
    F: FnMut(u64, &Grid),
{
    fn present(&mut self, step: u64, frame: &Grid) {
        self(step, frame)
    }
}

/// Sink that discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn present(&mut self, _step: u64, _frame: &Grid) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sink_records_steps() {
        let grid = Grid::zeros(4, 4);
        let mut seen = Vec::new();
        {
            let mut sink = |step: u64, frame: &Grid| seen.push((step, frame.shape()));
            sink.present(1, &grid);
            sink.present(2, &grid);
        }
        assert_eq!(seen, vec![(1, (4, 4)), (2, (4, 4))]);
    }

    #[test]
    fn test_null_sink_drives_engine() {
        use crate::compute::LeniaEngine;
        use crate::schema::LeniaParameters;

        let mut engine =
            LeniaEngine::new(8, 8, Some(Grid::zeros(8, 8)), LeniaParameters::default())
                .expect("valid engine");
        engine.run_with_sink(3, &mut NullSink).expect("steps succeed");
        assert_eq!(engine.steps(), 3);
    }
}
