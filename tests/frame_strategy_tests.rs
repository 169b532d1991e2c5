use chart_brush::ChartError;
use chart_brush::api::palette::CATEGORICAL_PALETTE;
use chart_brush::api::{
    AestheticRef, AestheticStrategy, ChartAggregateRef, ChartInfo, ChartInfoKind, ChartType,
    ColorFrameStrategy, FrameKind, FrameStrategy, FrameValue, LineFrameStrategy,
    ShapeFrameStrategy, SizeFrameStrategy, StaticFrame, TextStrategy, TextureFrameStrategy,
    VisualChannel, VisualFrame, combine_measure_frames,
};
use chart_brush::core::CellValue;
use chart_brush::render::{Color, ShapeStyle, TextureStyle};

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|name| (*name).to_owned()).collect()
}

#[test]
fn colliding_colors_get_distinct_palette_replacements() {
    let shared = CATEGORICAL_PALETTE[0];
    let measures = names(&["a", "b", "c", "d"]);
    let frames = vec![
        StaticFrame::color(shared),
        StaticFrame::color(shared),
        StaticFrame::color(CATEGORICAL_PALETTE[1]),
        StaticFrame::color(shared),
    ];
    let info = ChartInfo::default();
    let combined = ColorFrameStrategy.combine(&info, &measures, &frames, true, true);

    let colors: Vec<Color> = measures
        .iter()
        .filter_map(|name| combined.value_for_measure(name).as_color())
        .collect();
    assert_eq!(
        colors,
        vec![
            CATEGORICAL_PALETTE[0],
            CATEGORICAL_PALETTE[1],
            CATEGORICAL_PALETTE[2],
            CATEGORICAL_PALETTE[3],
        ]
    );
    for (i, color) in colors.iter().enumerate() {
        assert!(!colors[i + 1..].contains(color));
    }
}

#[test]
fn collision_replacement_is_deterministic() {
    let measures = names(&["a", "b", "c"]);
    let frames = vec![StaticFrame::color(CATEGORICAL_PALETTE[4]); 3];
    let first = ColorFrameStrategy.combine(&ChartInfo::default(), &measures, &frames, true, true);
    let second = ColorFrameStrategy.combine(&ChartInfo::default(), &measures, &frames, true, true);
    assert_eq!(first, second);
    assert_eq!(
        first.value_for_measure("b"),
        FrameValue::Color(CATEGORICAL_PALETTE[0])
    );
}

#[test]
fn interval_size_lookups_succeed_for_every_prefix_variant() {
    let info = ChartInfo::new(ChartType::IntervalBar);
    let combined = SizeFrameStrategy.combine(
        &info,
        &names(&["Sales", "Profit"]),
        &[StaticFrame::size(3.0), StaticFrame::size(5.0)],
        false,
        true,
    );
    for variant in [
        "Sales",
        "__all__Sales",
        "__top__Sales",
        "__top____all__Sales",
        "__all____top__Sales",
    ] {
        assert!(combined.contains(variant), "missing entry for {variant}");
        assert_eq!(combined.value_for_measure(variant), FrameValue::Size(3.0));
    }
    assert_eq!(
        combined.value_for_measure("__all____top__Profit"),
        FrameValue::Size(5.0)
    );
}

#[test]
fn bound_size_legend_needs_distinct_sizes() {
    let info = ChartInfo::new(ChartType::Point);
    let distinct = SizeFrameStrategy.combine(
        &info,
        &names(&["a", "b"]),
        &[
            StaticFrame::size(1.0).with_field("Weight"),
            StaticFrame::size(2.0).with_field("Weight"),
        ],
        true,
        true,
    );
    assert!(distinct.legend_visible);
    assert_eq!(distinct.field.as_deref(), Some("Weight"));

    let uniform = SizeFrameStrategy.combine(
        &info,
        &names(&["a", "b"]),
        &[
            StaticFrame::size(2.0).with_field("Weight"),
            StaticFrame::size(2.0).with_field("Weight"),
        ],
        true,
        true,
    );
    assert!(!uniform.legend_visible);
}

#[test]
fn text_channel_has_no_frame_strategy() {
    let error = VisualChannel::Text
        .frame_strategy()
        .expect_err("text channel has no frames");
    assert!(matches!(
        error,
        ChartError::UnsupportedChannel(VisualChannel::Text)
    ));
    assert_eq!(VisualChannel::Text.aesthetic_strategy().channel(), VisualChannel::Text);
}

#[test]
fn frame_channels_resolve_their_strategy() {
    for channel in [
        VisualChannel::Color,
        VisualChannel::Shape,
        VisualChannel::Size,
        VisualChannel::Line,
        VisualChannel::Texture,
    ] {
        let strategy = channel.frame_strategy().expect("frame channel");
        assert_eq!(strategy.channel(), channel);
    }
}

#[test]
fn text_binding_follows_multi_aesthetic_rule() {
    let global = AestheticRef::new(
        "Label",
        VisualFrame::Static(StaticFrame::color(CATEGORICAL_PALETTE[0])),
    );
    let per_measure = AestheticRef::new(
        "Note",
        VisualFrame::Static(StaticFrame::color(CATEGORICAL_PALETTE[1])),
    );
    let info = ChartInfo::default()
        .with_text_field(global)
        .with_measure("Sales", ChartAggregateRef::default().with_text_field(per_measure));

    let field = |info: &ChartInfo, measure| {
        TextStrategy
            .aesthetic_ref(info, measure)
            .map(|binding| binding.field.clone())
    };
    assert_eq!(field(&info, Some("Sales")).as_deref(), Some("Note"));
    assert_eq!(field(&info, Some("Other")), None);
    assert_eq!(field(&info, None).as_deref(), Some("Label"));

    let multi = info.with_multi_aesthetic(true);
    assert_eq!(field(&multi, Some("Sales")).as_deref(), Some("Note"));
    assert_eq!(field(&multi, None), None);
}

#[test]
fn general_frames_apply_to_merged_charts_and_always_for_size() {
    let info = ChartInfo::default()
        .with_general_frame(VisualFrame::Static(StaticFrame::color(CATEGORICAL_PALETTE[2])))
        .with_general_frame(VisualFrame::Static(StaticFrame::size(4.0)));
    assert!(ColorFrameStrategy.general_frame(&info).is_none());
    assert!(SizeFrameStrategy.general_frame(&info).is_some());

    let merged = info.with_kind(ChartInfoKind::Merged);
    assert_eq!(
        ColorFrameStrategy
            .general_frame(&merged)
            .map(VisualFrame::kind),
        Some(FrameKind::Color)
    );
}

#[test]
fn summary_frames_exist_for_color_and_texture_only() {
    let aggregate = ChartAggregateRef::default()
        .with_summary_color_frame(StaticFrame::color(CATEGORICAL_PALETTE[3]))
        .with_summary_texture_frame(StaticFrame::texture(TextureStyle::CrossHatch));
    let info = ChartInfo::default().with_measure("Sales", aggregate);

    assert!(ColorFrameStrategy.supports_summary_frame());
    assert!(ColorFrameStrategy.summary_frame(&info, "Sales").is_some());
    assert!(TextureFrameStrategy.summary_frame(&info, "Sales").is_some());
    assert!(!SizeFrameStrategy.supports_summary_frame());
    assert!(SizeFrameStrategy.summary_frame(&info, "Sales").is_none());
}

#[test]
fn measures_from_one_source_column_avoid_color_collisions() {
    let info = ChartInfo::default()
        .with_measure("Sales", ChartAggregateRef::default())
        .with_measure("__all__Sales", ChartAggregateRef::default());
    let combined = combine_measure_frames(
        &ColorFrameStrategy,
        &info,
        &names(&["Sales", "__all__Sales"]),
        true,
    );
    assert_eq!(
        combined.value_for_measure("Sales"),
        FrameValue::Color(CATEGORICAL_PALETTE[0])
    );
    assert_eq!(
        combined.value_for_measure("__all__Sales"),
        FrameValue::Color(CATEGORICAL_PALETTE[1])
    );
    assert_eq!(
        combined.value_for(&CellValue::from("__all__Sales")),
        FrameValue::Color(CATEGORICAL_PALETTE[1])
    );
}

#[test]
fn per_measure_bindings_resolve_without_multi_aesthetic() {
    let region = AestheticRef::new(
        "Region",
        VisualFrame::Static(StaticFrame::color(CATEGORICAL_PALETTE[0])),
    );
    let segment = AestheticRef::new(
        "Segment",
        VisualFrame::Static(StaticFrame::shape(ShapeStyle::Square)),
    );
    let weight = AestheticRef::new("Weight", VisualFrame::Static(StaticFrame::size(2.0)));
    let info = ChartInfo::default()
        .with_measure(
            "Sales",
            ChartAggregateRef::default()
                .with_color_field(region)
                .with_shape_field(segment)
                .with_size_field(weight),
        )
        .with_measure("Other", ChartAggregateRef::default());
    assert!(!info.multi_aesthetic);

    let field = |binding: Option<&AestheticRef>| binding.map(|binding| binding.field.clone());
    assert_eq!(
        field(ColorFrameStrategy.aesthetic_ref(&info, Some("Sales"))).as_deref(),
        Some("Region")
    );
    assert_eq!(
        field(ShapeFrameStrategy.aesthetic_ref(&info, Some("Sales"))).as_deref(),
        Some("Segment")
    );
    assert_eq!(
        field(SizeFrameStrategy.aesthetic_ref(&info, Some("Sales"))).as_deref(),
        Some("Weight")
    );
    assert!(LineFrameStrategy.aesthetic_ref(&info, Some("Sales")).is_none());

    assert!(ColorFrameStrategy.aesthetic_ref(&info, Some("Other")).is_none());
    assert!(SizeFrameStrategy.aesthetic_ref(&info, Some("Other")).is_none());
    assert!(ColorFrameStrategy.aesthetic_ref(&info, None).is_none());
}

#[test]
fn chart_binding_is_only_used_without_a_measure() {
    let chart_wide = AestheticRef::new(
        "Category",
        VisualFrame::Static(StaticFrame::color(CATEGORICAL_PALETTE[2])),
    );
    let info = ChartInfo::default()
        .with_color_field(chart_wide)
        .with_measure("Sales", ChartAggregateRef::default());

    let field = ColorFrameStrategy
        .aesthetic_ref(&info, None)
        .map(|binding| binding.field.as_str());
    assert_eq!(field, Some("Category"));
    assert!(ColorFrameStrategy.aesthetic_ref(&info, Some("Sales")).is_none());

    let multi = info.with_multi_aesthetic(true);
    assert!(ColorFrameStrategy.aesthetic_ref(&multi, None).is_none());
}

#[test]
fn combined_frame_maps_text_cells_to_measures() {
    let combined = combine_measure_frames(
        &TextureFrameStrategy,
        &ChartInfo::default().with_measure(
            "Sales",
            ChartAggregateRef::default()
                .with_texture_frame(StaticFrame::texture(TextureStyle::Dots)),
        ),
        &names(&["Sales", "Unconfigured"]),
        true,
    );
    assert_eq!(
        combined.value_for(&CellValue::from("__all__Sales")),
        FrameValue::Texture(TextureStyle::Dots)
    );
    assert_eq!(
        combined.value_for(&CellValue::from("Unconfigured")),
        FrameValue::Texture(TextureStyle::None)
    );
    assert!(combined.legend_visible);
}
