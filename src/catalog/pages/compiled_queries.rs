use crate::catalog::{Catalog, EndpointDemo, NavItem};

pub fn catalog() -> Catalog {
    Catalog {
        nav: NavItem {
            path: "/compiled-queries",
            label: "Compiled Queries",
            desc: "CompileQuery, CompileAsyncQuery",
        },
        title: "Compiled Queries",
        subtitle: "Demonstrates EF.CompileQuery and EF.CompileAsyncQuery - pre-compiled LINQ for ~15% faster execution.",
        demos: vec![
            EndpointDemo::get(
                "Compiled Query by Price",
                "/api/compiledqueries/byprice?minPrice=20",
                "Uses EF.CompileQuery to pre-compile a parameterized LINQ query - avoids repeated expression tree compilation.",
                r#"private static readonly Func<NorthwindContext, decimal, IEnumerable<Product>> _getByPrice =
    EF.CompileQuery((NorthwindContext ctx, decimal min) =>
        ctx.Products.Where(p => p.UnitPrice > min));

[HttpGet("byprice")]
public IActionResult GetByPrice(decimal minPrice)
{
    var products = _getByPrice(_context, minPrice).ToList();
    return Ok(new {
        method = "EF.CompileQuery",
        description = $"Products with UnitPrice > {minPrice}",
        data = products
    });
}"#,
            ),
            EndpointDemo::get(
                "Compiled Async Query by ID",
                "/api/compiledqueries/byid/1",
                "Uses EF.CompileAsyncQuery returning Task<Product?> for async single-entity lookup.",
                r#"private static readonly Func<NorthwindContext, int, Task<Product?>> _getById =
    EF.CompileAsyncQuery((NorthwindContext ctx, int id) =>
        ctx.Products.FirstOrDefault(p => p.ProductId == id));

[HttpGet("byid/{id}")]
public async Task<IActionResult> GetById(int id)
{
    var product = await _getById(_context, id);
    if (product == null) return NotFound();

    return Ok(new {
        method = "EF.CompileAsyncQuery (single entity)",
        description = "Pre-compiled async lookup by primary key",
        data = product
    });
}"#,
            ),
            EndpointDemo::get(
                "Compiled Query -- All Products",
                "/api/compiledqueries/all",
                "Simplest compiled query with no parameters - returns all products with zero expression tree overhead.",
                r#"private static readonly Func<NorthwindContext, IEnumerable<Product>> _getAll =
    EF.CompileQuery((NorthwindContext ctx) =>
        ctx.Products.OrderBy(p => p.ProductName));

[HttpGet("all")]
public IActionResult GetAll()
{
    var products = _getAll(_context).ToList();
    return Ok(new {
        method = "EF.CompileQuery (no parameters)",
        description = "All products, pre-compiled",
        data = products
    });
}"#,
            ),
            EndpointDemo::get(
                "Compiled Async Search (IAsyncEnumerable)",
                "/api/compiledqueries/search?q=Ch",
                "Uses EF.CompileAsyncQuery returning IAsyncEnumerable<T> for streaming results with await foreach.",
                r#"private static readonly Func<NorthwindContext, string, IAsyncEnumerable<Product>> _search =
    EF.CompileAsyncQuery((NorthwindContext ctx, string term) =>
        ctx.Products.Where(p => p.ProductName.Contains(term)));

[HttpGet("search")]
public async Task<IActionResult> Search(string q)
{
    var results = new List<Product>();
    await foreach (var product in _search(_context, q))
    {
        results.Add(product);
    }

    return Ok(new {
        method = "EF.CompileAsyncQuery (IAsyncEnumerable)",
        description = $"Streaming search for '{q}'",
        data = results
    });
}"#,
            ),
        ],
    }
}
