use itertools::{Itertools, MinMaxResult};
use log::info;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Données internes du profiler
#[derive(Debug, Default)]
struct ProfilerInner {
    samples: HashMap<String, VecDeque<f32>>, // Durées (ms) des blocs profilés
    metrics: HashMap<String, VecDeque<f32>>, // Valeurs scalaires
    frame_times: VecDeque<f32>,
}

/// Profiler mono-thread : fenêtre glissante de `max_samples` valeurs par label.
///
/// La boucle de simulation est strictement séquentielle, un `RefCell` suffit.
#[derive(Debug)]
pub struct Profiler {
    inner: RefCell<ProfilerInner>,
    max_samples: usize,
}

/// (moyenne, min, max)
pub type Summary = (f32, f32, f32);

fn push_bounded(buffer: &mut VecDeque<f32>, value: f32, max_samples: usize) {
    if buffer.len() >= max_samples {
        buffer.pop_front();
    }
    buffer.push_back(value);
}

fn summarize_series(series: &VecDeque<f32>) -> Option<Summary> {
    let (min, max) = match series.iter().copied().minmax_by(f32::total_cmp) {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    let avg = series.iter().sum::<f32>() / series.len() as f32;
    Some((avg, min, max))
}

fn summarize_map(map: &HashMap<String, VecDeque<f32>>) -> HashMap<String, Summary> {
    map.iter()
        .filter_map(|(k, v)| summarize_series(v).map(|s| (k.clone(), s)))
        .collect()
}

impl Profiler {
    pub fn new(max_samples: usize) -> Self {
        Self {
            inner: RefCell::new(ProfilerInner::default()),
            max_samples: max_samples.max(1),
        }
    }

    /// Mesure globale d'une frame (RAII)
    pub fn frame(&self) -> FrameGuard<'_> {
        FrameGuard {
            profiler: self,
            start: Instant::now(),
        }
    }

    /// Profile un bloc de code et retourne sa valeur de retour
    pub fn profile_block<T, F>(&self, label: impl Into<String>, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        let dt = start.elapsed().as_secs_f32() * 1000.0;

        let mut inner = self.inner.borrow_mut();
        let buffer = inner.samples.entry(label.into()).or_default();
        push_bounded(buffer, dt, self.max_samples);

        result
    }

    /// Enregistre une métrique scalaire
    pub fn record_metric(&self, label: impl Into<String>, value: f32) {
        let mut inner = self.inner.borrow_mut();
        let buffer = inner.metrics.entry(label.into()).or_default();
        push_bounded(buffer, value, self.max_samples);
    }

    /// FPS moyen sur la fenêtre glissante
    pub fn fps(&self) -> f32 {
        let inner = self.inner.borrow();
        match summarize_series(&inner.frame_times) {
            Some((avg, _, _)) if avg > 0.0 => 1000.0 / avg,
            _ => 0.0,
        }
    }

    pub fn total_frames(&self) -> usize {
        self.inner.borrow().frame_times.len()
    }

    /// Résumé des temps mesurés (moyenne, min, max) en ms
    pub fn summary(&self) -> HashMap<String, Summary> {
        summarize_map(&self.inner.borrow().samples)
    }

    /// Résumé des métriques scalaires (moyenne, min, max)
    pub fn metrics_summary(&self) -> HashMap<String, Summary> {
        summarize_map(&self.inner.borrow().metrics)
    }

    pub fn metric_summary(&self, label: &str) -> Option<Summary> {
        self.inner
            .borrow()
            .metrics
            .get(label)
            .and_then(summarize_series)
    }

    /// Log toutes les mesures vers l'info log avec un target spécifique
    pub fn log_metrics_for_target(&self, target: &str, show_fps: bool) {
        if show_fps {
            info!(target: target, "{:.2} FPS", self.fps());
        }
        for (label, (avg, min, max)) in self
            .summary()
            .into_iter()
            .sorted_by(|a, b| a.0.cmp(&b.0))
        {
            info!(
                target: target,
                "{}: avg = {:.3} ms | min = {:.3} ms | max = {:.3} ms",
                label, avg, min, max
            );
        }
        for (label, (avg, min, max)) in self
            .metrics_summary()
            .into_iter()
            .sorted_by(|a, b| a.0.cmp(&b.0))
        {
            info!(target: target, "{label}: avg={avg:.2}, min={min:.2}, max={max:.2}");
        }
    }
}

/// Mesure globale d'une frame
pub struct FrameGuard<'a> {
    profiler: &'a Profiler,
    start: Instant,
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        let dt = self.start.elapsed().as_secs_f32() * 1000.0;
        let mut inner = self.profiler.inner.borrow_mut();
        push_bounded(&mut inner.frame_times, dt, self.profiler.max_samples);
    }
}

/// Macro helper : log des mesures et du FPS, le target est déduit du module appelant
#[macro_export]
macro_rules! log_metrics_and_fps {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), true);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_block_returns_value_and_records_sample() {
        let profiler = Profiler::new(4);
        let v = profiler.profile_block("block", || 21 * 2);
        assert_eq!(v, 42);
        assert!(profiler.summary().contains_key("block"));
    }

    #[test]
    fn test_metrics_window_is_bounded() {
        let profiler = Profiler::new(3);
        for v in [1.0, 2.0, 3.0, 10.0] {
            profiler.record_metric("particles", v);
        }
        // 1 est sorti de la fenêtre
        let (avg, min, max) = profiler.metric_summary("particles").unwrap();
        assert_eq!(min, 2.0);
        assert_eq!(max, 10.0);
        assert!((avg - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_frame_guard_counts_frames() {
        let profiler = Profiler::new(10);
        assert_eq!(profiler.fps(), 0.0);
        for _ in 0..3 {
            let _guard = profiler.frame();
        }
        assert_eq!(profiler.total_frames(), 3);
    }

    #[test]
    fn test_unknown_metric_is_none() {
        let profiler = Profiler::new(10);
        assert!(profiler.metric_summary("nope").is_none());
    }
}
