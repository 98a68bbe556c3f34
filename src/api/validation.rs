use crate::core::{GridSpacing, PointGeometry, Size};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, validate_gradient_stops};

use super::{ChartStyle, FillKind, StreamingChartConfig};

pub(super) fn validate_config(config: &StreamingChartConfig) -> ChartResult<()> {
    let size = config.size.validate()?;
    config.point.validate()?;
    config.axis.validate(size)?;
    validate_chart_style(&config.style)
}

pub(super) fn validate_point(width: f64, height: f64) -> ChartResult<PointGeometry> {
    Ok(PointGeometry::new(width, height).validate()?.clamped())
}

pub(super) fn validate_size(width: f64, height: f64) -> ChartResult<Size> {
    Size::new(width, height).validate()
}

pub(super) fn validate_chart_style(style: &ChartStyle) -> ChartResult<()> {
    if let Some(background) = style.background {
        validate_style_color("background.color", background.color)?;
    }
    if let Some(grid) = &style.grid {
        validate_thickness("grid.thickness", grid.thickness)?;
        validate_style_color("grid.color", grid.color)?;
        validate_dash("grid.dash", &grid.dash)?;
        validate_grid_spacing(grid.spacing)?;
    }
    if let Some(axis_line) = style.axis_line {
        validate_thickness("axis_line.thickness", axis_line.thickness)?;
        validate_style_color("axis_line.color", axis_line.color)?;
    }
    if let Some(lines) = &style.lines {
        validate_thickness("lines.thickness", lines.thickness)?;
        validate_style_color("lines.color", lines.color)?;
        validate_dash("lines.dash", &lines.dash)?;
    }
    if let Some(points) = style.points {
        validate_thickness("points.thickness", points.thickness)?;
        validate_thickness("points.radius", points.radius)?;
        validate_style_color("points.line_color", points.line_color)?;
        validate_style_color("points.fill_color", points.fill_color)?;
    }
    if let Some(fill) = &style.fill {
        match &fill.kind {
            FillKind::Solid { color } => validate_style_color("fill.color", *color)?,
            FillKind::LinearGradient { stops, coords, .. } => {
                validate_gradient_stops(stops)
                    .map_err(|err| ChartError::InvalidStyle(format!("fill.stops: {err}")))?;
                if coords.iter().any(|c| !c.is_finite()) {
                    return Err(ChartError::InvalidStyle(
                        "fill.coords must be finite".to_owned(),
                    ));
                }
            }
        }
    }
    Ok(())
}

pub(super) fn validate_grid_spacing(spacing: GridSpacing) -> ChartResult<GridSpacing> {
    for (name, value) in [("grid.width", spacing.width), ("grid.height", spacing.height)] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidStyle(format!(
                "`{name}` must be finite and >= 0"
            )));
        }
    }
    validate_grid_offset(spacing.offset)?;
    Ok(spacing)
}

pub(super) fn validate_grid_offset(offset: f64) -> ChartResult<f64> {
    if !offset.is_finite() {
        return Err(ChartError::InvalidStyle(
            "`grid.offset` must be finite".to_owned(),
        ));
    }
    Ok(offset)
}

pub(super) fn validate_samples(samples: &[f64]) -> ChartResult<()> {
    if let Some(index) = samples.iter().position(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "sample at batch index {index} must be finite"
        )));
    }
    Ok(())
}

fn validate_style_color(name: &str, color: Color) -> ChartResult<()> {
    color
        .validate()
        .map_err(|err| ChartError::InvalidStyle(format!("`{name}`: {err}")))
}

fn validate_thickness(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidStyle(format!(
            "`{name}` must be finite and >= 0"
        )));
    }
    Ok(())
}

fn validate_dash(name: &str, dash: &[f64]) -> ChartResult<()> {
    if dash.iter().any(|len| !len.is_finite() || *len < 0.0) {
        return Err(ChartError::InvalidStyle(format!(
            "`{name}` lengths must be finite and >= 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_grid_spacing, validate_point, validate_samples};
    use crate::core::GridSpacing;
    use crate::error::ChartError;

    #[test]
    fn point_below_minimum_is_clamped() {
        let point = validate_point(0.0001, 2.0).expect("positive point");
        assert_eq!(point.width, 0.001);
        assert_eq!(point.height, 2.0);
    }

    #[test]
    fn non_positive_point_is_rejected() {
        assert!(matches!(
            validate_point(0.0, 1.0),
            Err(ChartError::InvalidPoint { .. })
        ));
    }

    #[test]
    fn negative_grid_spacing_is_rejected() {
        assert!(validate_grid_spacing(GridSpacing::new(-1.0, 1.0)).is_err());
        assert!(validate_grid_spacing(GridSpacing::new(0.0, 0.0)).is_ok());
    }

    #[test]
    fn non_finite_sample_reports_batch_index() {
        let err = validate_samples(&[1.0, f64::NAN]).expect_err("nan rejected");
        assert!(err.to_string().contains("index 1"));
    }
}
