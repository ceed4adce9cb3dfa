use crate::catalog::{Catalog, EndpointDemo, NavItem};

pub fn catalog() -> Catalog {
    Catalog {
        nav: NavItem {
            path: "/related-data",
            label: "Related Data",
            desc: "Include, ThenInclude, Explicit, Lazy Loading",
        },
        title: "Related Data Loading",
        subtitle: "Demonstrates eager loading (Include/ThenInclude), explicit loading, lazy loading, split queries, and filtered includes.",
        demos: vec![
            EndpointDemo::get(
                "Include (Eager Loading)",
                "/api/relateddata/eager-include",
                "Load products with their related Category in a single query using Include()",
                r#"// GET /api/relateddata/eager-include
var products = await _context.Products
    .Include(p => p.Category)
    .Take(10)
    .Select(p => new {
        p.ProductName,
        p.UnitPrice,
        CategoryName = p.Category!.CategoryName
    })
    .ToListAsync();

// Include() generates a LEFT JOIN in SQL."#,
            ),
            EndpointDemo::get(
                "Include + ThenInclude (Multi-level)",
                "/api/relateddata/eager-theninclude",
                "Load orders with customer and order details (multi-level eager loading)",
                r#"// GET /api/relateddata/eager-theninclude
var orders = await _context.Orders
    .Include(o => o.Customer)
    .Include(o => o.OrderDetails)
        .ThenInclude(od => od.Product)
    .Take(5)
    .ToListAsync();

// ThenInclude drills into the collection navigation.
// Customer -> Orders -> OrderDetails -> Product"#,
            ),
            EndpointDemo::get(
                "Explicit Loading",
                "/api/relateddata/explicit-loading",
                "Load related data on demand after the principal entity is already loaded",
                r#"// GET /api/relateddata/explicit-loading
var category = await _context.Categories.FirstAsync();

// Load the related products explicitly
await _context.Entry(category)
    .Collection(c => c.Products)
    .LoadAsync();

// For reference navigation:
// await _context.Entry(product)
//     .Reference(p => p.Category)
//     .LoadAsync();"#,
            ),
            EndpointDemo::get(
                "Lazy Loading (Proxies)",
                "/api/relateddata/lazy-loading",
                "Related data loaded automatically on first access (requires proxies package)",
                r#"// GET /api/relateddata/lazy-loading
// Requires: UseLazyLoadingProxies() in DbContext config
// Navigation properties must be virtual.

var product = await _context.Products.FirstAsync();

// Accessing product.Category triggers a lazy load query:
var categoryName = product.Category?.CategoryName;

// Warning: Can cause N+1 query problems in loops!"#,
            ),
            EndpointDemo::get(
                "AsSplitQuery",
                "/api/relateddata/split-query",
                "Split a multi-Include query into separate SQL queries to avoid cartesian explosion",
                r#"// GET /api/relateddata/split-query
var orders = await _context.Orders
    .Include(o => o.Customer)
    .Include(o => o.OrderDetails)
        .ThenInclude(od => od.Product)
    .AsSplitQuery()
    .Take(5)
    .ToListAsync();

// AsSplitQuery sends multiple SELECT statements
// instead of one large JOIN, avoiding data duplication."#,
            ),
            EndpointDemo::get(
                "Multiple Includes",
                "/api/relateddata/multiple-includes",
                "Include multiple navigation properties on the same entity",
                r#"// GET /api/relateddata/multiple-includes
var orders = await _context.Orders
    .Include(o => o.Customer)
    .Include(o => o.Employee)
    .Include(o => o.ShipViaNavigation)
    .Take(5)
    .Select(o => new {
        o.OrderId,
        CustomerName = o.Customer!.CompanyName,
        EmployeeName = o.Employee!.FirstName + " " + o.Employee.LastName,
        ShipperName = o.ShipViaNavigation!.CompanyName
    })
    .ToListAsync();"#,
            ),
            EndpointDemo::get(
                "Filtered Include",
                "/api/relateddata/filtered-include",
                "Apply Where/OrderBy/Take inside Include to filter the related collection",
                r#"// GET /api/relateddata/filtered-include
var categories = await _context.Categories
    .Include(c => c.Products
        .Where(p => !p.Discontinued)
        .OrderByDescending(p => p.UnitPrice)
        .Take(3)
    )
    .ToListAsync();

// Filtered Include (EF Core 5+) applies filters
// to the related collection loaded by Include."#,
            ),
        ],
    }
}
