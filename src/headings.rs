use crate::config::HelperConfig;
use crate::links::{build_url, with_param};
use crate::request::Request;
use crate::types::{Heading, HeadingCell, SortDirection};

/// Compute the header cell for every heading of a browse table.
///
/// A sortable heading links to the current page with the sort column set to
/// its column and the sort direction set to the next direction: `a` when the
/// column is already sorted descending, `d` otherwise. Every other query
/// parameter of the current page is carried over in order.
pub(crate) fn browse_headings(
    config: &HelperConfig,
    request: &Request,
    headings: &[Heading],
) -> Vec<HeadingCell> {
    let current_sort = request.current_sort(config);
    let current_dir = request.current_direction(config);

    let cells: Vec<HeadingCell> = headings
        .iter()
        .map(|heading| heading_cell(config, request, heading, current_sort, current_dir))
        .collect();

    tracing::debug!(
        cells = cells.len(),
        sort = current_sort.unwrap_or(""),
        dir = current_dir.as_param(),
        "built browse headings"
    );
    cells
}

fn heading_cell(
    config: &HelperConfig,
    request: &Request,
    heading: &Heading,
    current_sort: Option<&str>,
    current_dir: SortDirection,
) -> HeadingCell {
    let Some(column) = heading.column() else {
        return HeadingCell {
            label: heading.label.clone(),
            href: None,
            active: None,
        };
    };

    let active = (current_sort == Some(column)).then_some(current_dir);
    let next = active.map_or(SortDirection::Descending, |dir| dir.toggled());

    let params = with_param(&request.query, &config.sort_param, column);
    let params = with_param(&params, &config.sort_dir_param, next.as_param());
    let href = build_url(&request.path, &params);

    tracing::trace!(column, ?active, next = next.as_param(), "heading");

    HeadingCell {
        label: heading.label.clone(),
        href: Some(href),
        active,
    }
}

pub(crate) fn render(cells: &[HeadingCell]) -> String {
    cells.iter().map(HeadingCell::to_html).collect()
}
