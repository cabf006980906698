//! Viewport - owns every view's state and keeps the views linked
//!
//! The [`ViewCoordinator`] is the single writer of the effective filter and
//! of every [`ViewState`]. Gestures arrive as [`ViewEvent`]s; each one runs
//! to completion, recomputes derived selections and summaries, and publishes
//! one [`RedrawRequested`] per affected view on the event bus.

use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, info};

use lv_core::events::events::{FilterChanged, HoverChanged};
use lv_core::{
    compute_selection, BandAxis, BucketRange, CategoryFilter, CoordinatorError, EffectiveFilter,
    EngineConfig, EventBus, RecordId, RecordStore, ScaleExtent, Selection, ViewEvent, ViewId,
    ZoomTransform,
};

use crate::plots::AggregationContext;
use crate::space_view::{RedrawRequested, ViewSnapshot, ViewState};

/// The linked-view coordinator
pub struct ViewCoordinator {
    aggregation: AggregationContext,
    config: EngineConfig,
    extent: ScaleExtent,
    filter: EffectiveFilter,
    views: IndexMap<ViewId, ViewState>,
    hovered: Option<RecordId>,
    generation: u64,
    bus: Arc<EventBus>,
}

impl ViewCoordinator {
    /// Create the coordinator with every view unfiltered and unzoomed
    ///
    /// Publishes an initial redraw for every view.
    pub fn new(
        store: Arc<RecordStore>,
        config: EngineConfig,
        bus: Arc<EventBus>,
    ) -> Result<Self, CoordinatorError> {
        config.validate()?;

        let aggregation = AggregationContext::new(
            store.clone(),
            config.categories.clone(),
            config.views.iter().map(|v| &v.chart),
        );

        let full = Selection::full(&store);
        let views = config
            .views
            .iter()
            .map(|def| {
                let state = ViewState {
                    chart: def.chart.clone(),
                    selection: full.clone(),
                    transform: ZoomTransform::identity(),
                    detached_from_brush: false,
                    summary: Arc::new(aggregation.summarize(&def.chart, &full)),
                };
                (def.name.clone(), state)
            })
            .collect();

        let mut coordinator = Self {
            aggregation,
            extent: config.scale_extent(),
            config,
            filter: EffectiveFilter::default(),
            views,
            hovered: None,
            generation: 0,
            bus,
        };

        info!(
            views = coordinator.views.len(),
            records = store.len(),
            "View coordinator ready"
        );
        coordinator.redraw_all();

        Ok(coordinator)
    }

    /// Handle one gesture; returns the views that were redrawn
    pub fn dispatch(&mut self, event: ViewEvent) -> Result<Vec<ViewId>, CoordinatorError> {
        debug!(event = event.kind(), "Dispatching view event");

        match event {
            ViewEvent::GlobalFilter { category } => self.set_global_filter(&category),
            ViewEvent::Brush { range, source } => self.set_brush(range, &source),
            ViewEvent::BrushPixels { x0, x1, source } => self.brush_pixels(x0, x1, &source),
            ViewEvent::Zoom { view, transform } => self.zoom(&view, transform),
            ViewEvent::ResetView { view } => self.reset_view(&view),
            ViewEvent::ResetAll => Ok(self.reset_all()),
            ViewEvent::Hover { record } => self.hover(record).map(|_| Vec::new()),
            ViewEvent::Unhover => {
                self.unhover();
                Ok(Vec::new())
            }
        }
    }

    /// Change the global category filter
    ///
    /// Clears any brush and re-derives every view's selection; transforms
    /// are kept.
    pub fn set_global_filter(&mut self, category: &str) -> Result<Vec<ViewId>, CoordinatorError> {
        let category = CategoryFilter::from(category);
        if let CategoryFilter::Only(name) = &category {
            if !self.config.categories.contains(name) {
                return Err(CoordinatorError::UnknownCategory(name.clone()));
            }
        }

        self.filter = EffectiveFilter { category, brush: None };
        for state in self.views.values_mut() {
            state.detached_from_brush = false;
        }

        self.refresh_selections();
        self.publish_filter();
        Ok(self.redraw_all())
    }

    /// Set or clear the brush range
    ///
    /// Only the configured brush owner may call this. A new range
    /// cross-filters every view and resets every transform; clearing only
    /// restores the category-filtered selections.
    pub fn set_brush(
        &mut self,
        range: Option<BucketRange>,
        source: &ViewId,
    ) -> Result<Vec<ViewId>, CoordinatorError> {
        self.check_brush_owner(source)?;

        self.filter.brush = range;
        for state in self.views.values_mut() {
            state.detached_from_brush = false;
            if range.is_some() {
                state.transform = ZoomTransform::identity();
            }
        }

        self.refresh_selections();
        self.publish_filter();
        Ok(self.redraw_all())
    }

    /// Brush in pixel space of the owner's band axis
    pub fn brush_pixels(
        &mut self,
        x0: f64,
        x1: f64,
        source: &ViewId,
    ) -> Result<Vec<ViewId>, CoordinatorError> {
        self.check_brush_owner(source)?;
        if !x0.is_finite() || !x1.is_finite() {
            return Err(CoordinatorError::InvalidBrush(x0, x1));
        }

        let framing = self.views.get(source).map(|s| s.transform).unwrap_or_default();
        let range = BandAxis::new(self.aggregation.buckets(), self.config.band_width)
            .resolve(x0, x1, &framing);
        debug!(x0, x1, %range, "Resolved pixel brush");

        self.set_brush(Some(range), source)
    }

    /// Pan/zoom one view; the scale is clamped into `[1, K]`
    pub fn zoom(
        &mut self,
        view: &ViewId,
        transform: ZoomTransform,
    ) -> Result<Vec<ViewId>, CoordinatorError> {
        if !transform.is_finite() {
            return Err(CoordinatorError::InvalidTransform(transform));
        }

        let extent = self.extent;
        let state = self
            .views
            .get_mut(view)
            .ok_or_else(|| CoordinatorError::UnknownView(view.clone()))?;
        state.transform = transform.clamped(extent);

        Ok(self.redraw(vec![view.clone()]))
    }

    /// Reset one view's selection and transform
    ///
    /// Resetting the brush owner clears the brush for every view. Any other
    /// view drops back to the category-only selection and stays that way
    /// until the next filter or brush change.
    pub fn reset_view(&mut self, view: &ViewId) -> Result<Vec<ViewId>, CoordinatorError> {
        let brush_active = self.filter.brush.is_some();
        let state = self
            .views
            .get_mut(view)
            .ok_or_else(|| CoordinatorError::UnknownView(view.clone()))?;
        state.transform = ZoomTransform::identity();

        if *view == self.config.brush_owner {
            return self.set_brush(None, view);
        }

        state.detached_from_brush = brush_active;
        let selection = compute_selection(self.aggregation.store(), &self.filter.without_brush());
        apply_selection(&self.aggregation, state, selection);

        Ok(self.redraw(vec![view.clone()]))
    }

    /// Reset the filter, every selection and every transform
    pub fn reset_all(&mut self) -> Vec<ViewId> {
        self.filter = EffectiveFilter::default();
        for state in self.views.values_mut() {
            state.transform = ZoomTransform::identity();
            state.detached_from_brush = false;
        }

        info!("Reset all views");
        self.refresh_selections();
        self.publish_filter();
        self.redraw_all()
    }

    /// Hover pass-through; no view state changes
    pub fn hover(&mut self, id: RecordId) -> Result<(), CoordinatorError> {
        let record = self
            .aggregation
            .store()
            .get(id)
            .cloned()
            .ok_or(CoordinatorError::UnknownRecord(id))?;

        self.hovered = Some(id);
        self.bus.publish(HoverChanged { record: Some(record) });
        Ok(())
    }

    pub fn unhover(&mut self) {
        self.hovered = None;
        self.bus.publish(HoverChanged { record: None });
    }

    /// Current snapshot of one view
    pub fn snapshot(&self, view: &str) -> Option<Arc<ViewSnapshot>> {
        let (id, state) = self.views.get_key_value(view)?;
        Some(Arc::new(ViewSnapshot {
            view: id.clone(),
            generation: self.generation,
            selection: state.selection.clone(),
            transform: state.transform,
            summary: state.summary.clone(),
        }))
    }

    pub fn view(&self, view: &str) -> Option<&ViewState> {
        self.views.get(view)
    }

    /// Views in registration order
    pub fn views(&self) -> impl Iterator<Item = (&ViewId, &ViewState)> {
        self.views.iter()
    }

    pub fn filter(&self) -> &EffectiveFilter {
        &self.filter
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn hovered(&self) -> Option<RecordId> {
        self.hovered
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        self.aggregation.store()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn check_brush_owner(&self, source: &ViewId) -> Result<(), CoordinatorError> {
        if !self.views.contains_key(source) {
            return Err(CoordinatorError::UnknownView(source.clone()));
        }
        if *source != self.config.brush_owner {
            return Err(CoordinatorError::NotBrushOwner {
                source_view: source.clone(),
                owner: self.config.brush_owner.clone(),
            });
        }
        Ok(())
    }

    /// Re-derive every view's selection from the effective filter
    fn refresh_selections(&mut self) {
        let store = self.aggregation.store();
        let brushed = compute_selection(store, &self.filter);
        let any_detached = self.views.values().any(|s| s.detached_from_brush);
        let unbrushed = if any_detached && self.filter.brush.is_some() {
            compute_selection(store, &self.filter.without_brush())
        } else {
            brushed.clone()
        };

        for state in self.views.values_mut() {
            let selection = if state.detached_from_brush {
                unbrushed.clone()
            } else {
                brushed.clone()
            };
            apply_selection(&self.aggregation, state, selection);
        }
    }

    fn publish_filter(&self) {
        debug!(category = %self.filter.category, brush = ?self.filter.brush, "Filter changed");
        self.bus.publish(FilterChanged {
            filter: self.filter.clone(),
        });
    }

    fn redraw_all(&mut self) -> Vec<ViewId> {
        let views = self.views.keys().cloned().collect();
        self.redraw(views)
    }

    /// Start a new generation and publish a snapshot per view
    fn redraw(&mut self, views: Vec<ViewId>) -> Vec<ViewId> {
        self.generation += 1;

        for view in &views {
            if let Some(snapshot) = self.snapshot(view.as_str()) {
                self.bus.publish(RedrawRequested { snapshot });
            }
        }
        views
    }
}

/// Replace a view's selection, re-aggregating only when it changed
fn apply_selection(aggregation: &AggregationContext, state: &mut ViewState, selection: Selection) {
    if state.selection == selection {
        return;
    }

    state.summary = Arc::new(aggregation.summarize(&state.chart, &selection));
    state.selection = selection;
}

#[cfg(test)]
mod tests {
    use super::*;
    use lv_core::{ChartKind, GroupKey, GroupValue, Metric, Record, ViewDefinition};
    use parking_lot::Mutex;

    use crate::plots::AggregatedSummary;
    use crate::sync::LatestSnapshots;

    fn record(origin: &str, year: i32, cylinders: f64, mpg: f64) -> Record {
        Record {
            id: RecordId(0),
            name: format!("{} {}", origin, year),
            manufacturer: "maker".to_string(),
            mpg,
            cylinders,
            displacement: 100.0,
            horsepower: 90.0,
            weight: 2500.0,
            acceleration: 15.0,
            model_year: year,
            origin: origin.to_string(),
        }
    }

    /// 5 records: A x3, B x2; bucket 1970 x2, 1971 x3
    fn scenario_store() -> Arc<RecordStore> {
        Arc::new(RecordStore::from_records(vec![
            record("A", 1970, 4.0, 20.0),
            record("A", 1971, 6.0, 22.0),
            record("B", 1970, 8.0, 30.0),
            record("A", 1971, 4.0, 24.0),
            record("B", 1971, 8.0, 32.0),
        ]))
    }

    fn scenario_config() -> EngineConfig {
        EngineConfig {
            categories: vec!["A".to_string(), "B".to_string()],
            max_zoom: 10.0,
            brush_owner: ViewId::from("bars"),
            band_width: 200.0,
            views: vec![
                ViewDefinition::new(
                    "scatter",
                    ChartKind::Scatter { x: Metric::Mpg, y: Metric::Horsepower },
                ),
                ViewDefinition::new("bars", ChartKind::StackedBar { group_key: GroupKey::Origin }),
                ViewDefinition::new("box", ChartKind::BoxPlot { metric: Metric::Mpg }),
                ViewDefinition::new("line", ChartKind::Line { metric: Metric::Mpg }),
            ],
        }
    }

    fn coordinator() -> (ViewCoordinator, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let coordinator =
            ViewCoordinator::new(scenario_store(), scenario_config(), bus.clone()).unwrap();
        (coordinator, bus)
    }

    fn ids(coordinator: &ViewCoordinator, view: &str) -> Vec<usize> {
        coordinator.view(view).unwrap().selection.ids().iter().map(|id| id.index()).collect()
    }

    fn bars() -> ViewId {
        ViewId::from("bars")
    }

    /// Every view's selection equals what the filter alone derives
    fn assert_derived(coordinator: &ViewCoordinator) {
        let store = coordinator.store();
        for (_, state) in coordinator.views() {
            let filter = if state.detached_from_brush {
                coordinator.filter().without_brush()
            } else {
                coordinator.filter().clone()
            };
            assert_eq!(state.selection, compute_selection(store, &filter));
        }
    }

    #[test]
    fn test_concrete_scenario() {
        let (mut c, _bus) = coordinator();

        c.dispatch(ViewEvent::GlobalFilter { category: "A".to_string() }).unwrap();
        for view in ["scatter", "bars", "box", "line"] {
            assert_eq!(ids(&c, view), vec![0, 1, 3]);
        }

        match c.view("bars").unwrap().summary.as_ref() {
            AggregatedSummary::Stack(layout) => {
                let column = layout.column(1970).unwrap();
                let count = |origin: &str| {
                    column
                        .segments
                        .iter()
                        .find(|s| s.group == GroupValue::Text(origin.into()))
                        .map(|s| s.count)
                };
                assert_eq!((count("A"), count("B")), (Some(1), Some(0)));
                let segment = |origin: &str| {
                    column
                        .segments
                        .iter()
                        .find(|s| s.group == GroupValue::Text(origin.into()))
                        .unwrap()
                };
                let (a, b) = (segment("A"), segment("B"));
                assert_eq!((a.count, b.count), (1, 0));
            }
            other => panic!("unexpected summary {:?}", other),
        }

        let brush = ViewEvent::Brush { range: Some(BucketRange::new(1971, 1971)), source: bars() };
        c.dispatch(brush).unwrap();
        for view in ["scatter", "bars", "box", "line"] {
            assert_eq!(ids(&c, view), vec![1, 3]);
        }
        assert_derived(&c);

        c.dispatch(ViewEvent::ResetAll).unwrap();
        for (_, state) in c.views() {
            assert_eq!(state.selection.len(), 5);
            assert!(state.transform.is_identity());
        }
        assert_eq!(c.filter(), &EffectiveFilter::default());
    }

    #[test]
    fn test_global_filter_clears_brush_and_keeps_transforms() {
        let (mut c, _bus) = coordinator();
        let zoomed = ZoomTransform::new(3.0, 5.0, 5.0);

        c.set_brush(Some(BucketRange::new(1970, 1970)), &bars()).unwrap();
        c.zoom(&ViewId::from("box"), zoomed).unwrap();
        c.set_global_filter("B").unwrap();

        assert_eq!(c.filter().brush, None);
        assert_eq!(ids(&c, "line"), vec![2, 4]);
        assert_eq!(c.view("box").unwrap().transform, zoomed);
        assert_derived(&c);
    }

    #[test]
    fn test_brush_resets_transforms_but_clearing_does_not() {
        let (mut c, _bus) = coordinator();
        let zoomed = ZoomTransform::new(2.0, 0.0, 0.0);

        c.zoom(&ViewId::from("scatter"), zoomed).unwrap();
        c.set_brush(Some(BucketRange::new(1970, 1970)), &bars()).unwrap();
        assert!(c.views().all(|(_, s)| s.transform.is_identity()));

        c.zoom(&ViewId::from("scatter"), zoomed).unwrap();
        c.set_brush(None, &bars()).unwrap();
        assert_eq!(c.view("scatter").unwrap().transform, zoomed);
        assert_eq!(ids(&c, "scatter"), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_brush_clear_keeps_global_filter() {
        let (mut c, _bus) = coordinator();

        c.set_global_filter("A").unwrap();
        c.set_brush(Some(BucketRange::new(1970, 1970)), &bars()).unwrap();
        assert_eq!(ids(&c, "box"), vec![0]);

        c.set_brush(None, &bars()).unwrap();
        assert_eq!(c.filter().category, CategoryFilter::Only("A".to_string()));
        assert_eq!(ids(&c, "box"), vec![0, 1, 3]);
    }

    #[test]
    fn test_only_owner_may_brush() {
        let (mut c, _bus) = coordinator();
        let before = c.generation();

        let err = c
            .set_brush(Some(BucketRange::new(1970, 1970)), &ViewId::from("box"))
            .unwrap_err();
        assert!(matches!(err, CoordinatorError::NotBrushOwner { .. }));

        let err = c.set_brush(None, &ViewId::from("nope")).unwrap_err();
        assert!(matches!(err, CoordinatorError::UnknownView(_)));

        assert_eq!(c.filter().brush, None);
        assert_eq!(c.generation(), before);
    }

    #[test]
    fn test_pixel_brush_uses_owner_framing() {
        let (mut c, _bus) = coordinator();

        // Two buckets on a 200px axis: bands at 0 and 100
        c.brush_pixels(50.0, 150.0, &bars()).unwrap();
        assert_eq!(c.filter().brush, Some(BucketRange::new(1971, 1971)));
        assert_eq!(ids(&c, "scatter"), vec![1, 3, 4]);

        // Zoomed 2x and shifted: bands at -100 and 100
        c.zoom(&bars(), ZoomTransform::new(2.0, -100.0, 0.0)).unwrap();
        c.brush_pixels(-150.0, 0.0, &bars()).unwrap();
        assert_eq!(c.filter().brush, Some(BucketRange::new(1970, 1970)));
        assert_eq!(ids(&c, "line"), vec![0, 2]);

        // A span covering no band selects nothing
        c.brush_pixels(10.0, 20.0, &bars()).unwrap();
        assert!(c.view("box").unwrap().selection.is_empty());
        match c.view("box").unwrap().summary.as_ref() {
            AggregatedSummary::Box(summary) => assert_eq!(summary.drawable().count(), 0),
            other => panic!("unexpected summary {:?}", other),
        }

        assert!(matches!(
            c.brush_pixels(f64::NAN, 1.0, &bars()),
            Err(CoordinatorError::InvalidBrush(..))
        ));
    }

    #[test]
    fn test_zoom_is_independent_and_clamped() {
        let (mut c, _bus) = coordinator();
        c.set_global_filter("A").unwrap();

        let before: Vec<(ViewId, ViewState)> = c
            .views()
            .filter(|(id, _)| id.as_str() != "scatter")
            .map(|(id, s)| (id.clone(), s.clone()))
            .collect();
        let summary_before = c.view("scatter").unwrap().summary.clone();

        c.zoom(&ViewId::from("scatter"), ZoomTransform::new(50.0, 12.5, -3.0)).unwrap();

        let scatter = c.view("scatter").unwrap();
        assert_eq!(scatter.transform, ZoomTransform::new(10.0, 12.5, -3.0));
        assert!(Arc::ptr_eq(&scatter.summary, &summary_before));

        for (id, state) in before {
            let now = c.view(id.as_str()).unwrap();
            assert_eq!(now.selection, state.selection);
            assert_eq!(now.transform, state.transform);
        }

        assert!(matches!(
            c.zoom(&ViewId::from("scatter"), ZoomTransform::new(f64::INFINITY, 0.0, 0.0)),
            Err(CoordinatorError::InvalidTransform(_))
        ));
        assert!(matches!(
            c.zoom(&ViewId::from("pie"), ZoomTransform::identity()),
            Err(CoordinatorError::UnknownView(_))
        ));
    }

    #[test]
    fn test_reset_view_leaves_other_views_alone() {
        let (mut c, _bus) = coordinator();
        c.set_global_filter("A").unwrap();
        c.set_brush(Some(BucketRange::new(1971, 1971)), &bars()).unwrap();
        c.zoom(&ViewId::from("box"), ZoomTransform::new(4.0, 0.0, 0.0)).unwrap();

        let others: Vec<(ViewId, Selection)> = c
            .views()
            .filter(|(id, _)| id.as_str() != "box")
            .map(|(id, s)| (id.clone(), s.selection.clone()))
            .collect();

        let redrawn = c.reset_view(&ViewId::from("box")).unwrap();
        assert_eq!(redrawn, vec![ViewId::from("box")]);

        let reset = c.view("box").unwrap();
        assert!(reset.transform.is_identity());
        assert!(reset.detached_from_brush);
        assert_eq!(ids(&c, "box"), vec![0, 1, 3]);

        for (id, selection) in others {
            assert_eq!(c.view(id.as_str()).unwrap().selection, selection);
        }
        assert_derived(&c);

        // The next brush re-attaches the view
        c.set_brush(Some(BucketRange::new(1970, 1970)), &bars()).unwrap();
        assert!(!c.view("box").unwrap().detached_from_brush);
        assert_eq!(ids(&c, "box"), vec![0]);
    }

    #[test]
    fn test_resetting_owner_clears_brush_everywhere() {
        let (mut c, _bus) = coordinator();
        c.set_global_filter("B").unwrap();
        c.set_brush(Some(BucketRange::new(1970, 1970)), &bars()).unwrap();
        c.zoom(&bars(), ZoomTransform::new(2.0, 0.0, 0.0)).unwrap();

        c.reset_view(&bars()).unwrap();

        assert_eq!(c.filter().brush, None);
        assert!(c.view("bars").unwrap().transform.is_identity());
        for view in ["scatter", "bars", "box", "line"] {
            assert_eq!(ids(&c, view), vec![2, 4]);
        }
    }

    #[test]
    fn test_reset_all_restores_full_store() {
        let (mut c, _bus) = coordinator();
        c.set_global_filter("A").unwrap();
        c.set_brush(Some(BucketRange::new(1970, 1970)), &bars()).unwrap();
        c.reset_view(&ViewId::from("line")).unwrap();
        c.zoom(&ViewId::from("scatter"), ZoomTransform::new(3.0, 1.0, 1.0)).unwrap();

        c.reset_all();

        for (_, state) in c.views() {
            assert_eq!(state.selection, Selection::full(c.store()));
            assert!(state.transform.is_identity());
            assert!(!state.detached_from_brush);
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let (mut c, _bus) = coordinator();
        let err = c.set_global_filter("Martian").unwrap_err();

        assert!(matches!(err, CoordinatorError::UnknownCategory(ref name) if name == "Martian"));
        assert!(c.filter().is_unfiltered());
    }

    #[test]
    fn test_redraws_are_published_per_event() {
        let bus = Arc::new(EventBus::new());
        let latest = LatestSnapshots::new();
        latest.attach(&bus);

        let redraws = Arc::new(Mutex::new(Vec::new()));
        let sink = redraws.clone();
        bus.subscribe_fn::<RedrawRequested, _>(move |event| {
            sink.lock().push((event.snapshot.view.clone(), event.snapshot.generation));
        });

        let mut c = ViewCoordinator::new(scenario_store(), scenario_config(), bus.clone()).unwrap();
        assert_eq!(redraws.lock().len(), 4);
        assert!(redraws.lock().iter().all(|(_, generation)| *generation == 1));

        redraws.lock().clear();
        c.zoom(&ViewId::from("line"), ZoomTransform::new(2.0, 0.0, 0.0)).unwrap();
        assert_eq!(*redraws.lock(), vec![(ViewId::from("line"), 2)]);

        c.set_global_filter("B").unwrap();
        assert_eq!(redraws.lock().len(), 5);

        let line = latest.get("line").unwrap();
        assert_eq!(line.generation, 3);
        assert_eq!(line.selection.len(), 2);
        assert_eq!(line.transform, ZoomTransform::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_hover_is_pass_through() {
        let (mut c, bus) = coordinator();
        let hovered = Arc::new(Mutex::new(Vec::new()));
        let sink = hovered.clone();
        bus.subscribe_fn::<HoverChanged, _>(move |event| {
            sink.lock().push(event.record.as_ref().map(|r| r.id));
        });

        let generation = c.generation();
        c.dispatch(ViewEvent::Hover { record: RecordId(3) }).unwrap();
        c.dispatch(ViewEvent::Unhover).unwrap();

        assert_eq!(*hovered.lock(), vec![Some(RecordId(3)), None]);
        assert_eq!(c.generation(), generation);
        assert_eq!(c.hovered(), None);

        assert!(matches!(
            c.hover(RecordId(42)),
            Err(CoordinatorError::UnknownRecord(RecordId(42)))
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = scenario_config();
        config.brush_owner = ViewId::from("line");

        let result = ViewCoordinator::new(scenario_store(), config, Arc::new(EventBus::new()));
        assert!(matches!(result, Err(CoordinatorError::Config(_))));
    }
}
