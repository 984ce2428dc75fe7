use crate::http::models::{ChartData, Content, Inspiration, Machine, Slide};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Timers
    RotationTick,
    CountdownTick,
    SlideTick(u64),
    SlideSwap(usize),
    RefreshTick,

    // Fetched
    ContentFetched(Content),
    MachinesFetched(Vec<Machine>),
    ChartDataFetched(ChartData),
    InspirationsFetched(Vec<Inspiration>),
    SlidesFetched(Vec<Slide>),
}
