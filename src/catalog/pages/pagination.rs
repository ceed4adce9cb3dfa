use crate::catalog::{Catalog, EndpointDemo, NavItem};

pub fn catalog() -> Catalog {
    Catalog {
        nav: NavItem {
            path: "/pagination",
            label: "Pagination",
            desc: "Skip/Take, Keyset pagination",
        },
        title: "Pagination",
        subtitle: "Demonstrates Skip/Take offset pagination and keyset (cursor-based) pagination.",
        demos: vec![
            EndpointDemo::get(
                "Offset Pagination (Skip/Take)",
                "/api/pagination/offset?page=1&pageSize=10",
                "Classic offset pagination using Skip/Take - simple but performance degrades on deep pages.",
                r#"[HttpGet("offset")]
public async Task<IActionResult> GetOffset(int page = 1, int pageSize = 10)
{
    var totalCount = await _context.Products.CountAsync();
    var totalPages = (int)Math.Ceiling(totalCount / (double)pageSize);

    var products = await _context.Products
        .OrderBy(p => p.ProductId)
        .Skip((page - 1) * pageSize)
        .Take(pageSize)
        .ToListAsync();

    // ORDER BY p.ProductId OFFSET @skip ROWS FETCH NEXT @take ROWS ONLY
    return Ok(new {
        method = "Skip/Take (Offset Pagination)",
        data = new { page, pageSize, totalCount, totalPages, products }
    });
}"#,
            ),
            EndpointDemo::get(
                "Keyset (Cursor) Pagination",
                "/api/pagination/keyset?lastId=0&pageSize=10",
                "Uses WHERE instead of OFFSET - constant performance regardless of page depth.",
                r#"[HttpGet("keyset")]
public async Task<IActionResult> GetKeyset(int lastId = 0, int pageSize = 10)
{
    var products = await _context.Products
        .OrderBy(p => p.ProductId)
        .Where(p => p.ProductId > lastId)
        .Take(pageSize)
        .ToListAsync();

    var nextLastId = products.Any() ? products.Last().ProductId : (int?)null;

    return Ok(new {
        method = "Keyset (Cursor) Pagination",
        data = new { lastId, pageSize, nextLastId, products }
    });
}"#,
            ),
            EndpointDemo::get(
                "Pagination with Include",
                "/api/pagination/orders?page=1&pageSize=10",
                "Combines offset pagination with eager loading (Include) to paginate orders with their related customer data.",
                r#"[HttpGet("orders")]
public async Task<IActionResult> GetOrders(int page = 1, int pageSize = 10)
{
    var totalCount = await _context.Orders.CountAsync();
    var totalPages = (int)Math.Ceiling(totalCount / (double)pageSize);

    var orders = await _context.Orders
        .Include(o => o.Customer)
        .OrderByDescending(o => o.OrderDate)
        .Skip((page - 1) * pageSize)
        .Take(pageSize)
        .Select(o => new {
            o.OrderId,
            o.OrderDate,
            CustomerName = o.Customer != null ? o.Customer.CompanyName : null,
            o.ShipCity,
            o.ShipCountry
        })
        .ToListAsync();

    return Ok(new {
        method = "Pagination + Include (eager loading)",
        data = new { page, pageSize, totalCount, totalPages, orders }
    });
}"#,
            ),
        ],
    }
}
