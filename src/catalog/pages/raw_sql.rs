use crate::catalog::{Catalog, EndpointDemo, NavItem};

pub fn catalog() -> Catalog {
    Catalog {
        nav: NavItem {
            path: "/raw-sql",
            label: "Raw SQL",
            desc: "FromSql, FromSqlRaw, SqlQuery, ExecuteSql",
        },
        title: "Raw SQL Queries",
        subtitle: "Demonstrates FromSql, FromSqlRaw, FromSqlInterpolated, SqlQuery<T>, ExecuteSql, and SQL+LINQ composition.",
        demos: vec![
            EndpointDemo::get(
                "FromSql (Auto-Parameterized)",
                "/api/rawsql/fromsql",
                "Uses FromSql with string interpolation - EF auto-parameterizes to prevent SQL injection",
                r#"// GET /api/rawsql/fromsql
decimal minPrice = 20m;

var products = await _context.Products
    .FromSql($"SELECT * FROM Products WHERE UnitPrice > {minPrice}")
    .ToListAsync();

// EF Core translates the interpolated value into a
// parameterized query: @p0 = 20"#,
            ),
            EndpointDemo::get(
                "FromSqlRaw (Manual Params)",
                "/api/rawsql/fromsqlraw",
                "Uses FromSqlRaw with explicit SqlParameter for full control",
                r#"// GET /api/rawsql/fromsqlraw
var priceParam = new SqlParameter("@price", 30m);

var products = await _context.Products
    .FromSqlRaw("SELECT * FROM Products WHERE UnitPrice > @price", priceParam)
    .ToListAsync();

// Always use parameters - never concatenate user input!"#,
            ),
            EndpointDemo::get(
                "FromSqlInterpolated",
                "/api/rawsql/fromsqlinterpolated",
                "Explicitly parameterized interpolated SQL query",
                r#"// GET /api/rawsql/fromsqlinterpolated
decimal minPrice = 25m;

var products = await _context.Products
    .FromSqlInterpolated(
        $"SELECT * FROM Products WHERE UnitPrice > {minPrice}"
    )
    .OrderBy(p => p.ProductName)
    .ToListAsync();"#,
            ),
            EndpointDemo::get(
                "SqlQuery<string> (EF Core 8)",
                "/api/rawsql/sqlquery",
                "Query scalar values that do not map to an entity using Database.SqlQuery<T>()",
                r#"// GET /api/rawsql/sqlquery
var productNames = await _context.Database
    .SqlQuery<string>(
        $"SELECT ProductName AS Value FROM Products ORDER BY ProductName"
    )
    .ToListAsync();

// The column must be aliased as "Value"."#,
            ),
            EndpointDemo::post(
                "ExecuteSqlRawAsync",
                "/api/rawsql/executesqlraw",
                "Execute a non-query SQL command (UPDATE, INSERT, DELETE) with raw SQL",
                r#"// POST /api/rawsql/executesqlraw
var rowsAffected = await _context.Database
    .ExecuteSqlRawAsync(
        "UPDATE Products SET Discontinued = @disc WHERE CategoryID = @catId",
        new SqlParameter("@disc", true),
        new SqlParameter("@catId", 8)
    );

return Ok(new { rowsAffected });"#,
            ),
            EndpointDemo::post(
                "ExecuteSqlAsync",
                "/api/rawsql/executesql",
                "Execute a non-query SQL command with auto-parameterized interpolation",
                r#"// POST /api/rawsql/executesql
bool discontinued = true;
int categoryId = 8;

var rowsAffected = await _context.Database
    .ExecuteSqlAsync(
        $"UPDATE Products SET Discontinued = {discontinued} WHERE CategoryID = {categoryId}"
    );

return Ok(new { rowsAffected });"#,
            ),
            EndpointDemo::get(
                "FromSql + LINQ Composition",
                "/api/rawsql/fromsql-with-linq",
                "Start with raw SQL and then compose additional LINQ operators on top",
                r#"// GET /api/rawsql/fromsql-with-linq
var products = await _context.Products
    .FromSql($"SELECT * FROM Products")
    .Where(p => p.UnitPrice > 15)
    .OrderByDescending(p => p.UnitPrice)
    .Take(5)
    .Select(p => new {
        p.ProductName,
        p.UnitPrice,
        p.CategoryId
    })
    .ToListAsync();

// EF Core merges the raw SQL with the LINQ as a subquery."#,
            ),
        ],
    }
}
