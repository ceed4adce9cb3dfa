use crate::catalog::{Catalog, EndpointDemo, NavItem};

pub fn catalog() -> Catalog {
    Catalog {
        nav: NavItem {
            path: "/basic-queries",
            label: "Basic Queries",
            desc: "Where, Find, First, Count, Aggregates, GroupBy, Join",
        },
        title: "Basic LINQ Queries",
        subtitle: "Demonstrates LINQ method syntax, query syntax, Find, FirstOrDefault, aggregates, and more.",
        demos: vec![
            EndpointDemo::get(
                "Where (LINQ Filter)",
                "/api/basicqueries/where",
                "Filter products with UnitPrice > 20 using Where()",
                r#"// GET /api/basicqueries/where
var products = await _context.Products
    .Where(p => p.UnitPrice > 20)
    .Select(p => new {
        p.ProductId,
        p.ProductName,
        p.UnitPrice,
        p.UnitsInStock
    })
    .ToListAsync();"#,
            ),
            EndpointDemo::get(
                "Find (Primary Key)",
                "/api/basicqueries/find/1",
                "Look up product by primary key using FindAsync()",
                r#"// GET /api/basicqueries/find/{id}
var product = await _context.Products.FindAsync(id);

// FindAsync checks the local cache first,
// only hitting the database if needed."#,
            ),
            EndpointDemo::get(
                "FirstOrDefault",
                "/api/basicqueries/firstordefault",
                "Get first product in category 1",
                r#"// GET /api/basicqueries/firstordefault
var product = await _context.Products
    .Where(p => p.CategoryId == 1)
    .FirstOrDefaultAsync();

// Returns null if no match is found."#,
            ),
            EndpointDemo::get(
                "SingleOrDefault",
                "/api/basicqueries/singleordefault/1",
                "Expects exactly one result - throws if more than one",
                r#"// GET /api/basicqueries/singleordefault/{id}
var product = await _context.Products
    .Where(p => p.ProductId == id)
    .SingleOrDefaultAsync();

// Throws InvalidOperationException if more than one element."#,
            ),
            EndpointDemo::get(
                "Any (Existence Check)",
                "/api/basicqueries/any",
                "Check if any product costs > $100",
                r#"// GET /api/basicqueries/any
var anyExpensive = await _context.Products
    .AnyAsync(p => p.UnitPrice > 100);

return Ok(new { anyExpensive });"#,
            ),
            EndpointDemo::get(
                "Count",
                "/api/basicqueries/count",
                "Count total and discontinued products",
                r#"// GET /api/basicqueries/count
var totalCount = await _context.Products.CountAsync();
var discontinuedCount = await _context.Products
    .CountAsync(p => p.Discontinued);

return Ok(new { totalCount, discontinuedCount });"#,
            ),
            EndpointDemo::get(
                "Aggregates (Avg, Max, Min, Sum)",
                "/api/basicqueries/aggregates",
                "Aggregate functions on Products table",
                r#"// GET /api/basicqueries/aggregates
var avgPrice = await _context.Products
    .AverageAsync(p => (double?)p.UnitPrice ?? 0);
var maxPrice = await _context.Products
    .MaxAsync(p => (double?)p.UnitPrice ?? 0);
var minPrice = await _context.Products
    .MinAsync(p => (double?)p.UnitPrice ?? 0);
var totalValue = await _context.Products
    .SumAsync(p => (double?)(p.UnitPrice * p.UnitsInStock) ?? 0);

return Ok(new { avgPrice, maxPrice, minPrice, totalValue });"#,
            ),
            EndpointDemo::get(
                "OrderBy / ThenBy",
                "/api/basicqueries/orderby",
                "Top 10 most expensive products sorted",
                r#"// GET /api/basicqueries/orderby
var products = await _context.Products
    .OrderByDescending(p => p.UnitPrice)
    .ThenBy(p => p.ProductName)
    .Take(10)
    .Select(p => new {
        p.ProductName,
        p.UnitPrice,
        p.CategoryId
    })
    .ToListAsync();"#,
            ),
            EndpointDemo::get(
                "GroupBy",
                "/api/basicqueries/groupby",
                "Group products by category",
                r#"// GET /api/basicqueries/groupby
var groups = await _context.Products
    .GroupBy(p => p.CategoryId)
    .Select(g => new {
        CategoryId = g.Key,
        ProductCount = g.Count(),
        AvgPrice = g.Average(p => p.UnitPrice),
        MaxPrice = g.Max(p => p.UnitPrice)
    })
    .ToListAsync();"#,
            ),
            EndpointDemo::get(
                "Select Projection",
                "/api/basicqueries/select",
                "Project products with computed properties",
                r#"// GET /api/basicqueries/select
var products = await _context.Products
    .Select(p => new {
        p.ProductName,
        p.UnitPrice,
        p.UnitsInStock,
        StockValue = p.UnitPrice * p.UnitsInStock,
        IsExpensive = p.UnitPrice > 50
    })
    .Take(10)
    .ToListAsync();"#,
            ),
            EndpointDemo::get(
                "Distinct",
                "/api/basicqueries/distinct",
                "Get distinct customer cities",
                r#"// GET /api/basicqueries/distinct
var cities = await _context.Customers
    .Select(c => c.City)
    .Where(c => c != null)
    .Distinct()
    .OrderBy(c => c)
    .ToListAsync();"#,
            ),
            EndpointDemo::get(
                "Contains (SQL IN)",
                "/api/basicqueries/contains",
                "Products in categories 1, 2, or 3 using Contains()",
                r#"// GET /api/basicqueries/contains
var categoryIds = new List<int> { 1, 2, 3 };

var products = await _context.Products
    .Where(p => categoryIds.Contains(p.CategoryId ?? 0))
    .Select(p => new {
        p.ProductName,
        p.CategoryId,
        p.UnitPrice
    })
    .ToListAsync();

// Translates to: WHERE CategoryID IN (1, 2, 3)"#,
            ),
            EndpointDemo::get(
                "All",
                "/api/basicqueries/all",
                "Check if ALL products are in stock",
                r#"// GET /api/basicqueries/all
var allInStock = await _context.Products
    .AllAsync(p => p.UnitsInStock > 0);

return Ok(new { allInStock });"#,
            ),
            EndpointDemo::get(
                "LINQ Query Syntax",
                "/api/basicqueries/querysyntax",
                "Using from/where/select keywords instead of method chain",
                r#"// GET /api/basicqueries/querysyntax
var products = await (
    from p in _context.Products
    where p.UnitPrice > 20
    orderby p.ProductName
    select new {
        p.ProductName,
        p.UnitPrice,
        p.CategoryId
    }
).Take(10).ToListAsync();"#,
            ),
            EndpointDemo::get(
                "Join",
                "/api/basicqueries/join",
                "Explicit LINQ join between Products and Categories",
                r#"// GET /api/basicqueries/join
var results = await _context.Products
    .Join(
        _context.Categories,
        p => p.CategoryId,
        c => c.CategoryId,
        (p, c) => new {
            p.ProductName,
            p.UnitPrice,
            CategoryName = c.CategoryName
        }
    )
    .Take(10)
    .ToListAsync();"#,
            ),
            EndpointDemo::get(
                "TagWith",
                "/api/basicqueries/tagwith",
                "Adds SQL comment for diagnostics",
                r#"// GET /api/basicqueries/tagwith
var products = await _context.Products
    .TagWith("Getting top 5 expensive products for dashboard")
    .OrderByDescending(p => p.UnitPrice)
    .Take(5)
    .ToListAsync();

// Generated SQL includes:
// -- Getting top 5 expensive products for dashboard"#,
            ),
        ],
    }
}
