//! Hardware Performance Counter Benchmarks
//!
//! Measures instructions, cycles, cache misses and branch mispredictions for the
//! heap operations. The interesting comparison is between arities: a 4-ary heap
//! executes more comparisons per level than a binary heap but touches fewer
//! cache lines, and its unrolled child scan avoids most unpredictable branches.
//!
//! ## Running
//!
//! ```bash
//! # Requires perf_event_paranoid <= 1 or CAP_PERFMON
//! sudo sysctl kernel.perf_event_paranoid=1
//! cargo bench --features perf-counters --bench heap_perf
//! ```
//!
//! ## Metrics
//!
//! - Instructions: Total instructions executed
//! - Cycles: CPU cycles consumed
//! - IPC: Instructions per cycle (higher = more efficient)
//! - Cache misses: LLC (last-level cache) misses
//! - Branch misses: Mispredicted branches

#[cfg(all(feature = "perf-counters", target_os = "linux"))]
mod perf_benchmarks {
    use minmax_dary_heap::dary::{make_dary_heap, pop_dary_heap, push_dary_heap};
    use minmax_dary_heap::minmax::{
        make_minmax_heap, pop_minmax_heap_max, pop_minmax_heap_min, push_minmax_heap,
    };
    use minmax_dary_heap::DaryHeap;
    use perf_event::events::Hardware;
    use perf_event::{Builder, Group};
    use std::hint::black_box;

    /// Metrics collected from hardware performance counters
    #[derive(Debug, Clone, Default)]
    pub struct PerfMetrics {
        pub instructions: u64,
        pub cycles: u64,
        pub cache_references: u64,
        pub cache_misses: u64,
        pub branches: u64,
        pub branch_misses: u64,
    }

    impl PerfMetrics {
        pub fn ipc(&self) -> f64 {
            self.instructions as f64 / self.cycles as f64
        }

        pub fn cache_miss_rate(&self) -> f64 {
            if self.cache_references == 0 {
                0.0
            } else {
                self.cache_misses as f64 / self.cache_references as f64 * 100.0
            }
        }

        pub fn branch_miss_rate(&self) -> f64 {
            if self.branches == 0 {
                0.0
            } else {
                self.branch_misses as f64 / self.branches as f64 * 100.0
            }
        }
    }

    impl std::fmt::Display for PerfMetrics {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "{:>12} | {:>12} | {:>6.2} | {:>11.2}% | {:>11.2}%",
                self.instructions,
                self.cycles,
                self.ipc(),
                self.cache_miss_rate(),
                self.branch_miss_rate()
            )
        }
    }

    /// Measure a function with hardware performance counters
    pub fn measure_perf<F, R>(f: F) -> (R, PerfMetrics)
    where
        F: FnOnce() -> R,
    {
        let mut group = Group::new().unwrap_or_else(|e| {
            eprintln!("\nError: Failed to create perf group: {}", e);
            eprintln!(
                "\nThis usually means you don't have permission to access hardware counters."
            );
            eprintln!("To fix this, try one of:");
            eprintln!("  1. sudo sysctl kernel.perf_event_paranoid=1");
            eprintln!("  2. Run as root (not recommended)");
            eprintln!("  3. Set CAP_PERFMON capability on the binary");
            eprintln!();
            std::process::exit(1);
        });

        let mut counter = |kind: Hardware, name: &str| {
            Builder::new()
                .group(&mut group)
                .kind(kind)
                .build()
                .unwrap_or_else(|e| panic!("Failed to create {} counter: {}", name, e))
        };

        let cycles = counter(Hardware::CPU_CYCLES, "cycles");
        let instructions = counter(Hardware::INSTRUCTIONS, "instructions");
        let cache_refs = counter(Hardware::CACHE_REFERENCES, "cache_refs");
        let cache_misses = counter(Hardware::CACHE_MISSES, "cache_misses");
        let branches = counter(Hardware::BRANCH_INSTRUCTIONS, "branches");
        let branch_misses = counter(Hardware::BRANCH_MISSES, "branch_misses");

        group.enable().expect("Failed to enable perf group");
        let result = f();
        group.disable().expect("Failed to disable perf group");

        let counts = group.read().expect("Failed to read perf counters");

        let metrics = PerfMetrics {
            instructions: counts[&instructions],
            cycles: counts[&cycles],
            cache_references: counts[&cache_refs],
            cache_misses: counts[&cache_misses],
            branches: counts[&branches],
            branch_misses: counts[&branch_misses],
        };

        (result, metrics)
    }

    /// Run a workload several times on fresh input and return average metrics
    ///
    /// `setup` runs outside the measured region.
    pub fn benchmark_avg<S, F>(iterations: usize, mut setup: S, mut f: F) -> PerfMetrics
    where
        S: FnMut() -> Vec<i32>,
        F: FnMut(&mut Vec<i32>),
    {
        let mut total = PerfMetrics::default();

        for _ in 0..iterations {
            let mut input = setup();
            let (_, metrics) = measure_perf(|| f(&mut input));
            black_box(&input);
            total.instructions += metrics.instructions;
            total.cycles += metrics.cycles;
            total.cache_references += metrics.cache_references;
            total.cache_misses += metrics.cache_misses;
            total.branches += metrics.branches;
            total.branch_misses += metrics.branch_misses;
        }

        let n = iterations as u64;
        PerfMetrics {
            instructions: total.instructions / n,
            cycles: total.cycles / n,
            cache_references: total.cache_references / n,
            cache_misses: total.cache_misses / n,
            branches: total.branches / n,
            branch_misses: total.branch_misses / n,
        }
    }

    struct Lcg {
        state: u64,
    }

    impl Lcg {
        fn new(seed: u64) -> Self {
            Lcg { state: seed }
        }

        fn next_i32(&mut self) -> i32 {
            self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (self.state >> 33) as i32
        }
    }

    fn random_input(rng: &mut Lcg, n: usize) -> Vec<i32> {
        (0..n).map(|_| rng.next_i32()).collect()
    }

    // ========================================================================
    // Benchmark workloads
    // ========================================================================

    /// Push every element of the buffer one at a time, growing the heap prefix
    fn workload_push_minmax(heap: &mut Vec<i32>) {
        for end in 1..=heap.len() {
            push_minmax_heap(&mut heap[..end]);
        }
    }

    fn workload_push_dary<const D: usize>(heap: &mut Vec<i32>) {
        for end in 1..=heap.len() {
            push_dary_heap::<D, _>(&mut heap[..end]);
        }
    }

    /// Build the heap, then pop everything, shrinking the slice each time
    fn workload_drain_min(heap: &mut Vec<i32>) {
        make_minmax_heap(heap);
        for end in (1..=heap.len()).rev() {
            pop_minmax_heap_min(&mut heap[..end]);
        }
    }

    fn workload_drain_max(heap: &mut Vec<i32>) {
        make_minmax_heap(heap);
        for end in (1..=heap.len()).rev() {
            pop_minmax_heap_max(&mut heap[..end]);
        }
    }

    fn workload_drain_dary<const D: usize>(heap: &mut Vec<i32>) {
        make_dary_heap::<D, _>(heap);
        for end in (1..=heap.len()).rev() {
            pop_dary_heap::<D, _>(&mut heap[..end]);
        }
    }

    // ========================================================================
    // Benchmark runner
    // ========================================================================

    macro_rules! bench_heap {
        ($name:expr, $workload:expr, $n:expr, $iters:expr) => {{
            let mut rng = Lcg::new(5);
            let metrics = benchmark_avg($iters, || random_input(&mut rng, $n), $workload);
            println!("{:25} | {}", $name, metrics);
            metrics
        }};
    }

    fn print_header(title: &str, n: usize) {
        println!("\n=== {} (N={}) ===\n", title, n);
        println!(
            "{:25} | {:>12} | {:>12} | {:>6} | {:>12} | {:>12}",
            "Heap", "Instructions", "Cycles", "IPC", "Cache Miss%", "Branch Miss%"
        );
        println!("{:-<100}", "");
    }

    pub fn run_benchmarks() {
        const N: usize = 1 << 16;
        const ITERS: usize = 10;

        print_header("Push Workload", N);
        bench_heap!("MinMax", workload_push_minmax, N, ITERS);
        bench_heap!("Dary<2>", workload_push_dary::<2>, N, ITERS);
        bench_heap!("Dary<4>", workload_push_dary::<4>, N, ITERS);
        bench_heap!("Dary<8>", workload_push_dary::<8>, N, ITERS);

        print_header("Make Workload", N);
        bench_heap!("MinMax", |h: &mut Vec<i32>| make_minmax_heap(h), N, ITERS);
        bench_heap!("Dary<2>", |h: &mut Vec<i32>| make_dary_heap::<2, _>(h), N, ITERS);
        bench_heap!("Dary<4>", |h: &mut Vec<i32>| make_dary_heap::<4, _>(h), N, ITERS);
        bench_heap!("Dary<8>", |h: &mut Vec<i32>| make_dary_heap::<8, _>(h), N, ITERS);

        print_header("Make + Drain Workload", N);
        bench_heap!("MinMax pop_min", workload_drain_min, N, ITERS);
        bench_heap!("MinMax pop_max", workload_drain_max, N, ITERS);
        bench_heap!("Dary<2>", workload_drain_dary::<2>, N, ITERS);
        bench_heap!("Dary<4>", workload_drain_dary::<4>, N, ITERS);
        bench_heap!("Dary<8>", workload_drain_dary::<8>, N, ITERS);

        // same arity, read from the discipline instead of a constant
        if let Ok(runtime) = DaryHeap::with_arity(8) {
            bench_heap!(
                "Dary(runtime 8)",
                |h: &mut Vec<i32>| {
                    runtime.make(h);
                    for end in (1..=h.len()).rev() {
                        runtime.pop(&mut h[..end]);
                    }
                },
                N,
                ITERS
            );
        }
    }
}

#[cfg(not(all(feature = "perf-counters", target_os = "linux")))]
fn main() {
    eprintln!("Perf benchmarks require:");
    eprintln!("  1. Linux operating system");
    eprintln!("  2. --features perf-counters flag");
    eprintln!();
    eprintln!("Run with: cargo bench --features perf-counters --bench heap_perf");
    std::process::exit(1);
}

#[cfg(all(feature = "perf-counters", target_os = "linux"))]
fn main() {
    perf_benchmarks::run_benchmarks();
}
