use crate::catalog::{Catalog, EndpointDemo, NavItem};

pub fn catalog() -> Catalog {
    Catalog {
        nav: NavItem {
            path: "/global-filters",
            label: "Global Filters",
            desc: "HasQueryFilter, IgnoreQueryFilters",
        },
        title: "Global Query Filters",
        subtitle: "Demonstrates HasQueryFilter (auto-applied WHERE clause) and IgnoreQueryFilters to bypass it.",
        demos: vec![
            EndpointDemo::get(
                "Filtered (Auto-Applied)",
                "/api/globalfilters/filtered",
                "Global filter p => !p.Discontinued is auto-applied - only active products shown.",
                r#"// In NorthwindContext.OnModelCreating:
modelBuilder.Entity<Product>()
    .HasQueryFilter(p => !p.Discontinued);

[HttpGet("filtered")]
public async Task<IActionResult> GetFiltered()
{
    // No WHERE clause needed - the filter is applied automatically
    var products = await _context.Products
        .OrderBy(p => p.ProductName)
        .ToListAsync();

    return Ok(new {
        method = "HasQueryFilter (auto-applied)",
        description = $"Returned {products.Count} active products",
        data = products
    });
}"#,
            ),
            EndpointDemo::get(
                "Unfiltered (IgnoreQueryFilters)",
                "/api/globalfilters/unfiltered",
                "Bypasses the global filter with IgnoreQueryFilters() to see ALL products including discontinued.",
                r#"[HttpGet("unfiltered")]
public async Task<IActionResult> GetUnfiltered()
{
    // IgnoreQueryFilters() bypasses ALL global filters on this entity
    var products = await _context.Products
        .IgnoreQueryFilters()
        .OrderBy(p => p.ProductName)
        .ToListAsync();

    return Ok(new {
        method = "IgnoreQueryFilters()",
        description = $"Returned {products.Count} products - includes discontinued items",
        data = products
    });
}"#,
            ),
            EndpointDemo::get(
                "Filter Comparison",
                "/api/globalfilters/comparison",
                "Runs both filtered and unfiltered queries side-by-side to show the effect of HasQueryFilter.",
                r#"[HttpGet("comparison")]
public async Task<IActionResult> GetComparison()
{
    var filteredCount = await _context.Products.CountAsync();

    var unfilteredCount = await _context.Products
        .IgnoreQueryFilters()
        .CountAsync();

    var discontinuedProducts = await _context.Products
        .IgnoreQueryFilters()
        .Where(p => p.Discontinued)
        .Select(p => new { p.ProductId, p.ProductName, p.Discontinued })
        .ToListAsync();

    return Ok(new {
        method = "HasQueryFilter vs IgnoreQueryFilters comparison",
        description = $"Filter hides {unfilteredCount - filteredCount} discontinued products",
        data = new {
            filteredCount,
            unfilteredCount,
            hiddenByFilter = unfilteredCount - filteredCount,
            discontinuedProducts
        }
    });
}"#,
            ),
        ],
    }
}
